//! Code generation for the typed Vultr client.
//!
//! The emitted file is plain Rust text built line by line with a
//! [`SourceWriter`], tab-indented. It depends only on `vultr-rest`.
//!
//! ## Submodules
//!
//! - [`writer`] - Indentation-aware line writer
//! - [`naming`] - Identifier validation and escaping
//! - [`category`] - One struct per category, one async method per call
//! - [`aggregator`] - The client struct bundling all categories
//!
//! ## Output Format
//!
//! 1. A "generated, do not edit" header and module docs
//! 2. Lint allowances and the fixed `vultr_rest` imports
//! 3. Category structs in page order
//! 4. The aggregator and its `Client` re-export
//!
//! Rendering is deterministic: the same model always yields the same bytes.
//! See [`crate::output`] for validation and file writing.

pub mod aggregator;
pub mod category;
pub mod naming;
pub mod writer;

pub use aggregator::write_aggregator;
pub use category::write_category;
pub use writer::SourceWriter;

use crate::model::ApiModel;

/// First line of every generated file.
pub const GENERATED_HEADER: &str =
    "// @generated by vultr-gen from the Vultr API reference. Do not edit by hand.";

/// Renders the complete client source for `model`.
///
/// `client_name` must be a valid type name that no category uses.
pub fn render_client(model: &ApiModel, client_name: &str) -> String {
    let mut w = SourceWriter::new();

    w.line(GENERATED_HEADER);
    w.blank();
    w.line("//! Typed client for the Vultr API.");
    w.line("//!");
    w.line(format!(
        "//! Construct a [`{client_name}`] and call operations through its category fields."
    ));
    w.line("//! Every operation resolves to the decoded JSON response.");
    w.blank();
    w.line("#![allow(clippy::too_many_arguments, clippy::upper_case_acronyms)]");
    w.line("#![allow(non_camel_case_types, non_snake_case, unused_imports)]");
    w.blank();
    w.line("use std::sync::Arc;");
    w.blank();
    w.line("use vultr_rest::{Method, Payload, Rest, RestError, Value};");

    for category in &model.categories {
        w.blank();
        write_category(&mut w, category);
    }

    w.blank();
    write_aggregator(&mut w, model, client_name);

    w.finish()
}
