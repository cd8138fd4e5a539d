//! Request execution shim for the generated Vultr API client.
//!
//! Generated category structs never talk to `reqwest` directly. Every
//! operation forwards four things to [`Rest`]: the API path, whether an API
//! key is required, the HTTP [`Method`], and an optional [`Payload`].
//!
//! ## Wire behavior
//!
//! - Authenticated calls send the key in the `API-Key` header
//! - `GET`/`DELETE` send the payload as a query string
//! - `POST`/`PUT` send the payload as a JSON body
//! - A call that requires a key fails with [`RestError::MissingApiKey`]
//!   before any network I/O when no key is configured
//!
//! ## Examples
//!
//! ```rust,no_run
//! use vultr_rest::{Method, Payload, Rest, Value};
//!
//! # async fn run() -> Result<(), vultr_rest::RestError> {
//! let rest = Rest::new(Some("my-api-key".to_string()));
//! let payload = Payload::from([("SUBID", Value::from(576965))]);
//! let info = rest
//!     .execute_with("/v1/server/bandwidth", true, Method::Get, payload)
//!     .await?;
//! println!("{info}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod method;
pub mod payload;

pub use client::{API_KEY_HEADER, DEFAULT_BASE_URL, Rest, RestBuilder};
pub use error::RestError;
pub use method::Method;
pub use payload::Payload;
pub use serde_json::Value;
