//! Errors raised while executing an API call.

use thiserror::Error;

/// Errors from the request execution shim.
///
/// [`RestError::MissingApiKey`] is a configuration error raised before any
/// request is built. Every other variant comes from the transport or the
/// remote API and is passed through unchanged.
#[derive(Debug, Error)]
pub enum RestError {
    /// The call requires an API key and none is configured.
    #[error("API key is required for {path}")]
    MissingApiKey {
        /// API path of the call that was refused.
        path: String,
    },

    /// The base URL and path do not form a valid URL.
    #[error("Invalid request URL '{url}': {source}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// HTTP request failed due to a network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
        /// Response body, or the status text when the body is unreadable.
        message: String,
    },

    /// The response body is not valid JSON.
    #[error("Failed to decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RestError {
    /// Returns `true` for errors caused by local configuration rather than
    /// by the network or the remote API.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingApiKey { .. } | Self::InvalidUrl { .. })
    }
}
