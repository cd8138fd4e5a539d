//! Extracted API model.
//!
//! Built once per run by [`crate::extract`] and handed to
//! [`crate::codegen`] unchanged.

use vultr_rest::Method;

/// The whole documented API, categories in page order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiModel {
    pub categories: Vec<Category>,
}

impl ApiModel {
    /// Total number of endpoints across all categories.
    pub fn endpoint_count(&self) -> usize {
        self.categories.iter().map(|c| c.endpoints.len()).sum()
    }
}

/// One API grouping, e.g. "Server" or "DNS".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Type name: the heading text with whitespace removed (`BlockStorage`).
    pub name: String,
    /// Anchor id (`block`); field name on the aggregator and call-id prefix.
    pub id: String,
    /// Calls in page order.
    pub endpoints: Vec<Endpoint>,
}

/// One documented call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Method name: the call's anchor id without the category prefix.
    pub name: String,
    /// Site-relative URL path (`/v1/server/list`).
    pub path: String,
    pub method: Method,
    pub auth_required: bool,
    /// One entry per paragraph; may be empty.
    pub description: Vec<String>,
    /// Parameters in page order.
    pub params: Vec<Parameter>,
}

impl Endpoint {
    /// Parameters that are always sent.
    pub fn required_params(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter().filter(|p| !p.optional)
    }

    /// Parameters sent only when the caller supplies them.
    pub fn optional_params(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter().filter(|p| p.optional)
    }
}

/// One input of a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Name in its documented casing (`SUBID`, `label`).
    pub name: String,
    /// Declared type token as written on the page (`Integer`, `String`).
    pub kind: String,
    pub optional: bool,
    pub description: String,
}

impl Parameter {
    /// Rust type this parameter is emitted as.
    pub fn param_type(&self) -> ParamType {
        ParamType::from_declared(&self.kind)
    }
}

/// Rust-side type for a declared parameter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Integer,
    Text,
    List,
    Boolean,
    /// Anything the page declares that has no dedicated mapping.
    Any,
}

impl ParamType {
    /// Maps a declared type token, ignoring case.
    ///
    /// ## Examples
    ///
    /// ```
    /// use vultr_gen::model::ParamType;
    ///
    /// assert_eq!(ParamType::from_declared("Integer"), ParamType::Integer);
    /// assert_eq!(ParamType::from_declared("password"), ParamType::Text);
    /// assert_eq!(ParamType::from_declared("Object"), ParamType::Any);
    /// ```
    pub fn from_declared(kind: &str) -> Self {
        match kind.to_ascii_lowercase().as_str() {
            "integer" | "int" => Self::Integer,
            "string" | "password" => Self::Text,
            "array" => Self::List,
            "boolean" | "bool" => Self::Boolean,
            _ => Self::Any,
        }
    }

    /// The argument type in the emitted signature.
    pub fn rust_type(self) -> &'static str {
        match self {
            Self::Integer => "i64",
            Self::Text => "&str",
            Self::List => "&[String]",
            Self::Boolean => "bool",
            Self::Any => "Value",
        }
    }
}
