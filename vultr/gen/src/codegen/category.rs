//! Category struct generation.
//!
//! Each category becomes a struct holding the shared execution shim, with
//! one async method per documented call.

use super::naming::{param_ident, rust_ident, string_literal};
use super::writer::SourceWriter;
use crate::model::{Category, Endpoint, Parameter};

/// Writes the struct and `impl` block for one category.
pub fn write_category(w: &mut SourceWriter, category: &Category) {
    w.doc(&format!("Calls in the `{}` category.", category.name));
    w.block(format!("pub struct {}", category.name), |w| {
        w.line("rest: Arc<Rest>,");
    });
    w.blank();

    w.block(format!("impl {}", category.name), |w| {
        w.doc("Creates the category over a shared execution shim.");
        w.block("pub fn new(rest: Arc<Rest>) -> Self", |w| {
            w.line("Self { rest }");
        });

        for endpoint in &category.endpoints {
            w.blank();
            write_endpoint(w, endpoint);
        }
    });
}

fn write_endpoint(w: &mut SourceWriter, endpoint: &Endpoint) {
    write_endpoint_docs(w, endpoint);

    let args: Vec<String> = std::iter::once("&self".to_string())
        .chain(endpoint.params.iter().map(argument))
        .collect();
    let signature = format!(
        "pub async fn {}({}) -> Result<Value, RestError>",
        rust_ident(&endpoint.name),
        args.join(", ")
    );

    let path = string_literal(&endpoint.path);
    let method = format!("Method::{}", endpoint.method.variant_name());

    w.block(signature, |w| {
        if endpoint.params.is_empty() {
            w.line(format!(
                "self.rest.execute({path}, {}, {method}).await",
                endpoint.auth_required
            ));
            return;
        }

        let required: Vec<String> = endpoint
            .required_params()
            .map(|p| {
                format!(
                    "({}, Value::from({}))",
                    string_literal(&p.name),
                    param_ident(&p.name)
                )
            })
            .collect();
        let has_optional = endpoint.optional_params().next().is_some();
        let binding = if has_optional { "let mut payload" } else { "let payload" };

        if required.is_empty() {
            w.line(format!("{binding} = Payload::new();"));
        } else {
            w.line(format!("{binding} = Payload::from([{}]);", required.join(", ")));
        }

        for param in endpoint.optional_params() {
            let ident = param_ident(&param.name);
            w.block(format!("if let Some({ident}) = {ident}"), |w| {
                w.line(format!(
                    "payload.insert({}, {ident});",
                    string_literal(&param.name)
                ));
            });
        }

        w.line(format!(
            "self.rest.execute_with({path}, {}, {method}, payload).await",
            endpoint.auth_required
        ));
    });
}

fn write_endpoint_docs(w: &mut SourceWriter, endpoint: &Endpoint) {
    let paragraphs: Vec<&str> = endpoint
        .description
        .iter()
        .map(String::as_str)
        .filter(|p| !p.is_empty())
        .collect();
    for (index, paragraph) in paragraphs.iter().enumerate() {
        if index > 0 {
            w.doc("");
        }
        w.doc(paragraph);
    }
    if !paragraphs.is_empty() {
        w.doc("");
    }

    let auth = if endpoint.auth_required {
        "API key required"
    } else {
        "no API key"
    };
    w.doc(&format!("`{} {}` ({auth})", endpoint.method, endpoint.path));

    if endpoint.params.is_empty() {
        return;
    }
    w.doc("");
    w.doc("# Parameters");
    w.doc("");
    for param in &endpoint.params {
        w.doc(&param_doc(param));
    }
}

fn param_doc(param: &Parameter) -> String {
    let kind = if param.optional {
        format!("`{}`, optional", param.kind)
    } else {
        format!("`{}`", param.kind)
    };
    let ident = param_ident(&param.name);
    let ident = ident.trim_start_matches("r#");
    if param.description.is_empty() {
        format!("* `{ident}` ({kind})")
    } else {
        format!("* `{ident}` ({kind}) - {}", param.description)
    }
}

fn argument(param: &Parameter) -> String {
    let ty = param.param_type().rust_type();
    let ty = if param.optional {
        format!("Option<{ty}>")
    } else {
        ty.to_string()
    };
    format!("{}: {ty}", param_ident(&param.name))
}
