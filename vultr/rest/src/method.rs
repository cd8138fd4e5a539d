//! HTTP verbs used by the Vultr API.

use strum::{Display, EnumIter, EnumString};

/// The closed set of HTTP verbs a documented call may use.
///
/// Parsing is case-insensitive so that whatever casing the reference page
/// uses maps onto the same variant. Any other verb fails to parse.
///
/// ## Examples
///
/// ```rust
/// use vultr_rest::Method;
///
/// assert_eq!("post".parse::<Method>().unwrap(), Method::Post);
/// assert_eq!(Method::Delete.to_string(), "DELETE");
/// assert!("PATCH".parse::<Method>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Method {
    /// HTTP GET - payload goes in the query string.
    Get,
    /// HTTP POST - payload goes in the JSON body.
    Post,
    /// HTTP PUT - payload goes in the JSON body.
    Put,
    /// HTTP DELETE - payload goes in the query string.
    Delete,
}

impl Method {
    /// Returns `true` if the payload travels in the request body.
    pub fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    /// Returns the variant name as written in Rust source (`"Get"`, ...).
    pub fn variant_name(self) -> &'static str {
        match self {
            Self::Get => "Get",
            Self::Post => "Post",
            Self::Put => "Put",
            Self::Delete => "Delete",
        }
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        method.to_reqwest()
    }
}
