//! Error types for the client generator.

use thiserror::Error;

/// Errors that can occur while generating the client.
///
/// Every variant is fatal: the pipeline stops at the first error and no
/// output file is written.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to fetch the reference page.
    #[error("Failed to fetch API reference: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The reference page answered with a non-success status.
    #[error("Fetching '{url}' returned HTTP {status}")]
    HttpStatus {
        /// The URL that was requested.
        url: String,
        /// The HTTP status code returned.
        status: u16,
    },

    /// A content marker is missing from the fetched page.
    #[error("Content marker not found in page: {marker:?}")]
    MarkerNotFound {
        /// The marker that could not be located.
        marker: String,
    },

    /// An expected element is missing from the document tree.
    ///
    /// `context` names the category or call being processed.
    #[error("Unexpected page structure in {context}: {message}")]
    Structure {
        /// Where in the page the problem was found.
        context: String,
        /// What was expected but not found.
        message: String,
    },

    /// A call documents an HTTP verb outside GET/POST/PUT/DELETE.
    #[error("Unsupported HTTP method '{method}' in {context}")]
    UnsupportedMethod {
        /// The call that declares the method.
        context: String,
        /// The verb as found in the page.
        method: String,
    },

    /// The auth cell is neither "Yes" nor "No" (strict mode only).
    #[error("Unrecognised API key requirement '{value}' in {context}")]
    InvalidAuthFlag {
        /// The call that declares the requirement.
        context: String,
        /// The cell text as found in the page.
        value: String,
    },

    /// A name from the page cannot be used as a Rust identifier.
    #[error("'{name}' in {context} is not a valid identifier")]
    InvalidIdentifier {
        /// Where the name was found.
        context: String,
        /// The offending name.
        name: String,
    },

    /// Two calls in one category produce the same method name.
    #[error("Duplicate endpoint '{name}' in category '{category}'")]
    DuplicateEndpoint {
        /// The category containing both calls.
        category: String,
        /// The colliding method name.
        name: String,
    },

    /// Two category blocks produce the same type name or field name.
    #[error("Duplicate category '{name}'")]
    DuplicateCategory {
        /// The colliding type or field name.
        name: String,
    },

    /// Emitted source failed validation.
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to write output file.
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl GeneratorError {
    /// Shorthand for a [`GeneratorError::Structure`] error.
    pub fn structure(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Structure {
            context: context.into(),
            message: message.into(),
        }
    }
}

/// Convenience Result type for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;
