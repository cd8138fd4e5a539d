//! Vultr Client Generator
//!
//! Generates a typed Rust client for the Vultr API from the vendor's HTML
//! API reference page.
//!
//! ## Pipeline
//!
//! 1. [`fetch`] downloads the page and slices out the content region
//! 2. [`dom`] parses the region into a [`dom::Node`] tree
//! 3. [`extract`] walks the tree into an [`model::ApiModel`]
//! 4. [`codegen`] renders the model as Rust source
//! 5. [`output`] validates the source and writes it
//!
//! Every stage fails fast: the first unexpected shape aborts the run and no
//! output is written.
//!
//! ## Examples
//!
//! ```no_run
//! use vultr_gen::config::GeneratorConfig;
//!
//! # async fn run() -> Result<(), vultr_gen::errors::GeneratorError> {
//! let code = vultr_gen::generate(&GeneratorConfig::new()).await?;
//! println!("{code}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Generated Client
//!
//! ```text
//! pub struct Server { rest: Arc<Rest> }
//!
//! impl Server {
//!     pub async fn label_set(&self, subid: i64, label: Option<&str>) -> Result<Value, RestError>;
//! }
//!
//! pub struct Vultr { rest: Arc<Rest>, pub server: Server, ... }
//! ```

pub mod codegen;
pub mod config;
pub mod dom;
pub mod errors;
pub mod extract;
pub mod fetch;
pub mod layout;
pub mod model;
pub mod output;
pub mod params;

#[cfg(test)]
pub(crate) mod test_utils;

use tracing::info;

use crate::config::GeneratorConfig;
use crate::errors::{GeneratorError, Result};

/// Fetches the reference page and renders the client source.
///
/// ## Errors
///
/// Returns the first error of any stage; see [`generate_from_html`].
pub async fn generate(config: &GeneratorConfig) -> Result<String> {
    config.validate()?;
    let html = fetch::fetch_page(&config.url, config.timeout).await?;
    generate_from_html(&html, config)
}

/// Renders the client source from an already retrieved page.
///
/// The returned source has been validated with `syn`.
///
/// ## Errors
///
/// - `MarkerNotFound` when the content region cannot be located
/// - `Structure`, `UnsupportedMethod`, `InvalidAuthFlag`, `InvalidIdentifier`
///   or `DuplicateEndpoint` from extraction
/// - `ConfigError` when a category would shadow the client struct
/// - `CodeGenError` when the emitted source does not parse
pub fn generate_from_html(html: &str, config: &GeneratorConfig) -> Result<String> {
    config.validate()?;

    let region = fetch::slice_content(html, &config.start_marker, &config.end_marker)?;
    info!(bytes = region.len(), "Located content region");

    let tree = dom::parse_fragment(region);
    let model = extract::extract_api(&tree, &config.layout, config.strict_auth)?;

    if let Some(category) = model
        .categories
        .iter()
        .find(|c| c.name == config.client_name)
    {
        return Err(GeneratorError::ConfigError(format!(
            "client name '{}' collides with category '{}'",
            config.client_name, category.id
        )));
    }

    let code = codegen::render_client(&model, &config.client_name);
    output::validate_code(&code)?;
    info!(
        categories = model.categories.len(),
        endpoints = model.endpoint_count(),
        "Rendered client"
    );
    Ok(code)
}
