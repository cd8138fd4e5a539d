//! Aggregator struct generation.
//!
//! The aggregator owns the shared [`Rest`](vultr_rest::Rest) shim and
//! exposes one public field per category, named by the category's anchor
//! id.

use super::naming::rust_ident;
use super::writer::SourceWriter;
use crate::model::ApiModel;

/// Alias under which the aggregator is re-exported.
pub const CLIENT_ALIAS: &str = "Client";

/// Writes the aggregator struct, its constructors and key accessors.
pub fn write_aggregator(w: &mut SourceWriter, model: &ApiModel, client_name: &str) {
    w.doc("Vultr API client bundling every category over one shared execution shim.");
    w.doc("");
    w.doc("Changing the API key through [`Self::set_api_key`] affects every category.");
    w.block(format!("pub struct {client_name}"), |w| {
        w.line("rest: Arc<Rest>,");
        for category in &model.categories {
            w.line(format!("pub {}: {},", rust_ident(&category.id), category.name));
        }
    });
    w.blank();

    w.block(format!("impl {client_name}"), |w| {
        w.doc("Creates a client against the public API endpoint.");
        w.block("pub fn new(api_key: Option<String>) -> Self", |w| {
            w.line("Self::with_rest(Rest::new(api_key))");
        });
        w.blank();

        w.doc("Creates a client over a preconfigured execution shim.");
        w.block("pub fn with_rest(rest: Rest) -> Self", |w| {
            w.line("let rest = Arc::new(rest);");
            w.block("Self", |w| {
                for category in &model.categories {
                    w.line(format!(
                        "{}: {}::new(Arc::clone(&rest)),",
                        rust_ident(&category.id),
                        category.name
                    ));
                }
                w.line("rest,");
            });
        });
        w.blank();

        w.doc("Returns the configured API key.");
        w.block("pub fn api_key(&self) -> Option<String>", |w| {
            w.line("self.rest.api_key()");
        });
        w.blank();

        w.doc("Replaces the API key used by subsequent calls.");
        w.block("pub fn set_api_key(&self, api_key: Option<String>)", |w| {
            w.line("self.rest.set_api_key(api_key);");
        });
    });

    if client_name != CLIENT_ALIAS {
        w.blank();
        w.line(format!("pub use self::{client_name} as {CLIENT_ALIAS};"));
    }
}
