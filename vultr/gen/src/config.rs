//! Generator configuration.

use std::time::Duration;

use crate::errors::{GeneratorError, Result};
use crate::layout::PageLayout;

/// Location of the API reference page.
pub const DEFAULT_URL: &str = "https://www.vultr.com/api/";

/// Marker at the start of the content region.
pub const DEFAULT_START_MARKER: &str = "<div class=\"main-content";

/// Marker right after the content region.
pub const DEFAULT_END_MARKER: &str = "<!-- /.main-content -->";

/// Name of the generated aggregator struct.
pub const DEFAULT_CLIENT_NAME: &str = "Vultr";

/// Timeout for fetching the reference page.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for a generator run.
///
/// Use the builder methods to override the defaults.
///
/// ## Examples
///
/// ```
/// use vultr_gen::config::GeneratorConfig;
///
/// let config = GeneratorConfig::new()
///     .client_name("VultrClient")
///     .strict_auth(true);
/// assert_eq!(config.client_name, "VultrClient");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Reference page URL.
    pub url: String,
    /// Marker at the start of the content region.
    pub start_marker: String,
    /// Marker right after the content region.
    pub end_marker: String,
    /// Name of the generated aggregator struct.
    pub client_name: String,
    /// Positional assumptions about the page.
    pub layout: PageLayout,
    /// Reject auth cells other than "Yes"/"No" instead of warning.
    pub strict_auth: bool,
    /// Timeout for fetching the page.
    pub timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            start_marker: DEFAULT_START_MARKER.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
            client_name: DEFAULT_CLIENT_NAME.to_string(),
            layout: PageLayout::default(),
            strict_auth: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reference page URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the content region markers.
    pub fn markers(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_marker = start.into();
        self.end_marker = end.into();
        self
    }

    /// Set the aggregator struct name.
    pub fn client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = name.into();
        self
    }

    /// Replace the page layout.
    pub fn layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Fail on unrecognised auth cells.
    pub fn strict_auth(mut self, strict: bool) -> Self {
        self.strict_auth = strict;
        self
    }

    /// Set the fetch timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Checks the configuration before any work is done.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` for empty markers or a client
    /// name that is not a Rust type identifier.
    pub fn validate(&self) -> Result<()> {
        if self.start_marker.is_empty() || self.end_marker.is_empty() {
            return Err(GeneratorError::ConfigError(
                "content markers must not be empty".to_string(),
            ));
        }
        let mut chars = self.client_name.chars();
        let valid_name = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_name {
            return Err(GeneratorError::ConfigError(format!(
                "client name '{}' is not a valid type name",
                self.client_name
            )));
        }
        Ok(())
    }
}
