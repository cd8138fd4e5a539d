//! Endpoint extraction from the parsed reference page.
//!
//! Walks the [`Node`] tree of the content region and builds the
//! [`ApiModel`]. Everything is located by position, as described by
//! [`PageLayout`]; a missing piece aborts the run with a
//! [`GeneratorError::Structure`] naming the category or call.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};
use vultr_rest::Method;

use crate::codegen::naming::{is_identifier, is_reserved_member, param_ident};
use crate::dom::{Element, Node};
use crate::errors::{GeneratorError, Result};
use crate::layout::{AUTH_NOT_REQUIRED, AUTH_REQUIRED, PageLayout};
use crate::model::{ApiModel, Category, Endpoint};
use crate::params::parse_parameter_block;

/// Builds the API model from the content region's tree.
///
/// `root` is the tree returned by [`crate::dom::parse_fragment`]; its first
/// child is the content container whose element children are the intro
/// blocks followed by one block per category.
///
/// ## Errors
///
/// Fails on the first structural problem, unsupported HTTP verb, invalid
/// identifier, or duplicate category or endpoint name. With `strict_auth`, an auth cell
/// other than "Yes"/"No" is an error too.
pub fn extract_api(root: &Node, layout: &PageLayout, strict_auth: bool) -> Result<ApiModel> {
    let container = root
        .as_element()
        .and_then(|root| root.children.first())
        .and_then(Node::as_element)
        .ok_or_else(|| GeneratorError::structure("content region", "no container element"))?;

    let blocks: Vec<&Element> = container.child_elements().collect();
    if blocks.len() < layout.intro_block_count {
        return Err(GeneratorError::structure(
            "content region",
            format!(
                "expected at least {} intro blocks, found {} elements",
                layout.intro_block_count,
                blocks.len()
            ),
        ));
    }

    let mut seen_names = BTreeSet::new();
    let mut seen_ids = BTreeSet::new();
    let mut categories = Vec::new();
    for (index, block) in blocks[layout.intro_block_count..].iter().enumerate() {
        let category = extract_category(index, block, layout, strict_auth)?;
        if !seen_names.insert(category.name.clone()) {
            return Err(GeneratorError::DuplicateCategory {
                name: category.name,
            });
        }
        if !seen_ids.insert(category.id.clone()) {
            return Err(GeneratorError::DuplicateCategory { name: category.id });
        }
        categories.push(category);
    }

    let model = ApiModel { categories };
    info!(
        categories = model.categories.len(),
        endpoints = model.endpoint_count(),
        "Extracted API model"
    );
    Ok(model)
}

fn extract_category(
    index: usize,
    block: &Element,
    layout: &PageLayout,
    strict_auth: bool,
) -> Result<Category> {
    let id = block.attr("id").ok_or_else(|| {
        GeneratorError::structure(format!("category #{}", index + 1), "missing id attribute")
    })?;
    let context = format!("category '{id}'");

    let heading = block
        .find_descendant(&layout.category_heading_tag)
        .ok_or_else(|| {
            GeneratorError::structure(
                &context,
                format!("missing <{}> heading", layout.category_heading_tag),
            )
        })?;
    let name: String = heading.text().split_whitespace().collect();

    for candidate in [name.as_str(), id] {
        if !is_identifier(candidate) || is_reserved_member(candidate) {
            return Err(GeneratorError::InvalidIdentifier {
                context: context.clone(),
                name: candidate.to_string(),
            });
        }
    }

    let mut seen = BTreeSet::new();
    let mut endpoints = Vec::new();
    for call in block.children_by_tag("div") {
        let endpoint = extract_endpoint(call, id, layout, strict_auth)?;
        if !seen.insert(endpoint.name.clone()) {
            return Err(GeneratorError::DuplicateEndpoint {
                category: name,
                name: endpoint.name,
            });
        }
        endpoints.push(endpoint);
    }

    debug!(category = %name, endpoints = endpoints.len(), "Extracted category");
    Ok(Category {
        name,
        id: id.to_string(),
        endpoints,
    })
}

fn extract_endpoint(
    call: &Element,
    category_id: &str,
    layout: &PageLayout,
    strict_auth: bool,
) -> Result<Endpoint> {
    let call_id = call.attr("id").ok_or_else(|| {
        GeneratorError::structure(format!("category '{category_id}'"), "call without id attribute")
    })?;
    let context = format!("call '{call_id}'");
    let name = strip_category_prefix(call_id, category_id).to_string();
    if !is_identifier(&name) || name == "new" {
        return Err(GeneratorError::InvalidIdentifier { context, name });
    }

    let path = call
        .children_by_tag(&layout.call_heading_tag)
        .next()
        .map(|heading| heading.text().trim().to_string())
        .ok_or_else(|| {
            GeneratorError::structure(
                &context,
                format!("missing <{}> heading", layout.call_heading_tag),
            )
        })?;

    let description = call
        .children_by_tag("p")
        .map(|p| p.text().trim().to_string())
        .collect();

    let table = call
        .children_by_tag("table")
        .next()
        .ok_or_else(|| GeneratorError::structure(&context, "missing <table>"))?;
    let rows = table.descendants_by_tag("tr");

    let auth_text = row_value(&rows, layout.auth_row_index, layout.value_cell_index, &context)?;
    let auth_required = parse_auth_flag(&auth_text, &context, strict_auth)?;

    let method_text = row_value(&rows, layout.method_row_index, layout.value_cell_index, &context)?;
    let method = method_text
        .parse::<Method>()
        .map_err(|_| GeneratorError::UnsupportedMethod {
            context: context.clone(),
            method: method_text.clone(),
        })?;

    let params = match parameter_text(call, layout, &context)? {
        Some(text) => parse_parameter_block(&context, &text)?,
        None => Vec::new(),
    };

    let mut seen_params = BTreeSet::new();
    if let Some(dup) = params
        .iter()
        .find(|p| !seen_params.insert(param_ident(&p.name)))
    {
        return Err(GeneratorError::structure(
            &context,
            format!("parameter '{}' is listed twice", dup.name),
        ));
    }

    debug!(
        call = call_id,
        %method,
        path = %path,
        params = params.len(),
        "Extracted call"
    );

    Ok(Endpoint {
        name,
        path,
        method,
        auth_required,
        description,
        params,
    })
}

/// Strips `"{category_id}_"` from the front of `call_id`, ignoring case.
fn strip_category_prefix<'a>(call_id: &'a str, category_id: &str) -> &'a str {
    call_id
        .get(..category_id.len())
        .filter(|head| head.eq_ignore_ascii_case(category_id))
        .and_then(|_| call_id[category_id.len()..].strip_prefix('_'))
        .unwrap_or(call_id)
}

/// Trimmed text of `td` cell `cell` in table row `row`.
fn row_value(rows: &[&Element], row: usize, cell: usize, context: &str) -> Result<String> {
    let tr = rows
        .get(row)
        .ok_or_else(|| GeneratorError::structure(context, format!("table has no row {row}")))?;
    tr.children_by_tag("td")
        .nth(cell)
        .map(|td| td.text().trim().to_string())
        .ok_or_else(|| {
            GeneratorError::structure(context, format!("table row {row} has no cell {cell}"))
        })
}

fn parse_auth_flag(text: &str, context: &str, strict: bool) -> Result<bool> {
    match text {
        AUTH_REQUIRED => Ok(true),
        AUTH_NOT_REQUIRED => Ok(false),
        other if strict => Err(GeneratorError::InvalidAuthFlag {
            context: context.to_string(),
            value: other.to_string(),
        }),
        other => {
            warn!(context, value = other, "Unrecognised API key requirement; assuming none");
            Ok(false)
        }
    }
}

/// Text of the parameter code block, or `None` when the call has none.
///
/// A call with fewer code blocks than the layout expects is a structural
/// error; a block without `<pre><code>` is too.
fn parameter_text(call: &Element, layout: &PageLayout, context: &str) -> Result<Option<String>> {
    let block = call
        .children_by_tag("div")
        .filter(|div| div.has_class(&layout.code_block_class))
        .nth(layout.parameter_block_index)
        .ok_or_else(|| {
            GeneratorError::structure(
                context,
                format!(
                    "missing code block #{} (class \"{}\")",
                    layout.parameter_block_index, layout.code_block_class
                ),
            )
        })?;

    let code = block
        .find_descendant("pre")
        .and_then(|pre| pre.find_descendant("code"))
        .ok_or_else(|| GeneratorError::structure(context, "parameter block has no <pre><code>"))?;

    let text = code.text();
    Ok((!text.trim().is_empty()).then_some(text))
}
