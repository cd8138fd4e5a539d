//! HTTP execution with credential handling and tracing instrumentation.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use tracing::{Span, debug, instrument};
use url::Url;

use crate::error::RestError;
use crate::method::Method;
use crate::payload::Payload;
use serde_json::Value;

/// Origin every API path is resolved against.
pub const DEFAULT_BASE_URL: &str = "https://api.vultr.com/";

/// Header carrying the API key on authenticated calls.
pub const API_KEY_HEADER: &str = "API-Key";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring a [`Rest`] shim.
#[derive(Debug)]
pub struct RestBuilder {
    base_url: String,
    timeout: Duration,
    api_key: Option<String>,
}

impl RestBuilder {
    fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api_key: None,
        }
    }

    /// Overrides the API origin (useful against a local mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the API key sent on authenticated calls.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Builds the [`Rest`] shim.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<Rest, RestError> {
        Url::parse(&self.base_url).map_err(|source| RestError::InvalidUrl {
            url: self.base_url.clone(),
            source,
        })?;

        let client = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(Rest {
            client,
            base_url: self.base_url,
            api_key: RwLock::new(self.api_key),
        })
    }
}

/// Turns `(path, auth flag, verb, payload)` into an HTTP request.
///
/// The API key is the only mutable state. It can be replaced at any time
/// from any thread; the most recent write wins.
#[derive(Debug)]
pub struct Rest {
    client: reqwest::Client,
    base_url: String,
    api_key: RwLock<Option<String>>,
}

impl Rest {
    /// Creates a shim against [`DEFAULT_BASE_URL`].
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: RwLock::new(api_key),
        }
    }

    /// Creates a new builder.
    pub fn builder() -> RestBuilder {
        RestBuilder::new()
    }

    /// Returns the API origin.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the currently configured API key.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the API key.
    pub fn set_api_key(&self, api_key: Option<String>) {
        *self.api_key.write().unwrap_or_else(PoisonError::into_inner) = api_key;
    }

    /// Executes a call that takes no parameters.
    ///
    /// ## Errors
    ///
    /// See [`Rest::execute_with`].
    pub async fn execute(
        &self,
        path: &str,
        auth_required: bool,
        method: Method,
    ) -> Result<Value, RestError> {
        self.send(path, auth_required, method, &Payload::new()).await
    }

    /// Executes a call with its parameters.
    ///
    /// ## Errors
    ///
    /// - [`RestError::MissingApiKey`] when `auth_required` is set and no key
    ///   is configured; no request is sent
    /// - [`RestError::Request`] on transport failure
    /// - [`RestError::HttpStatus`] on a non-success response
    /// - [`RestError::Decode`] when the body is not JSON
    pub async fn execute_with(
        &self,
        path: &str,
        auth_required: bool,
        method: Method,
        payload: Payload,
    ) -> Result<Value, RestError> {
        self.send(path, auth_required, method, &payload).await
    }

    #[instrument(
        name = "vultr_request",
        skip(self, payload),
        fields(
            http.method = %method,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
        )
    )]
    async fn send(
        &self,
        path: &str,
        auth_required: bool,
        method: Method,
        payload: &Payload,
    ) -> Result<Value, RestError> {
        let api_key = if auth_required {
            let key = self
                .api_key()
                .filter(|key| !key.is_empty())
                .ok_or_else(|| RestError::MissingApiKey {
                    path: path.to_string(),
                })?;
            Some(key)
        } else {
            None
        };

        let url = self.endpoint_url(path)?;
        Span::current().record("http.url", url.as_str());

        let mut request = self.client.request(method.to_reqwest(), url);
        if let Some(key) = api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        request = if method.has_body() {
            request.json(payload)
        } else {
            request.query(&payload.to_query_pairs())
        };

        let response = request.send().await?;
        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            return Err(RestError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "response received");
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&body)?)
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, RestError> {
        let invalid = |source| RestError::InvalidUrl {
            url: format!("{}{}", self.base_url, path),
            source,
        };
        Url::parse(&self.base_url)
            .map_err(invalid)?
            .join(path)
            .map_err(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_origin() {
        let rest = Rest::new(None);
        assert_eq!(rest.base_url(), DEFAULT_BASE_URL);
        assert!(rest.api_key().is_none());
    }

    #[test]
    fn api_key_last_write_wins() {
        let rest = Rest::new(Some("first".to_string()));
        rest.set_api_key(Some("second".to_string()));
        assert_eq!(rest.api_key().as_deref(), Some("second"));
        rest.set_api_key(None);
        assert!(rest.api_key().is_none());
    }

    #[test]
    fn builder_rejects_invalid_base_url() {
        let result = Rest::builder().base_url("not a url").build();
        assert!(matches!(result, Err(RestError::InvalidUrl { .. })));
    }

    #[test]
    fn endpoint_url_joins_absolute_path() {
        let rest = Rest::builder()
            .base_url("http://localhost:8080/")
            .build()
            .unwrap();
        let url = rest.endpoint_url("/v1/account/info").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/account/info");
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        // Unroutable origin: reaching the network would surface a Request error.
        let rest = Rest::builder()
            .base_url("http://127.0.0.1:9/")
            .build()
            .unwrap();
        let err = rest
            .execute("/v1/account/info", true, Method::Get)
            .await
            .unwrap_err();
        assert!(matches!(err, RestError::MissingApiKey { ref path } if path == "/v1/account/info"));
    }
}
