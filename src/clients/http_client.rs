//! HTTP client for Pterodactyl panel communication.
//!
//! This module provides the [`HttpClient`] type, which builds authenticated
//! requests against the panel base URL and classifies the responses.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::clients::errors::{ApiError, ApiErrorDetail, HttpError, InvalidHttpRequestError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiKey, PanelConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the panel.
///
/// The client handles:
/// - Resolving request paths against the panel base URL
/// - Pagination query parameters (`page`, `per_page`, `include`)
/// - Default headers (`Authorization`, `Accept`, `User-Agent`)
/// - Classifying non-2xx responses into [`HttpError`]
///
/// There is no retry logic; every failure is returned to the caller.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use pterodactyl_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "api/application/users")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// println!("{}", response.text());
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: ApiKey,
    request_timeout: Option<Duration>,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

/// The `{"errors": [...]}` body the panel sends with non-2xx responses.
#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

impl HttpClient {
    /// Creates a new HTTP client from a validated configuration.
    ///
    /// The base URL is treated as a directory: a panel served under
    /// `https://example.com/panel` resolves `api/client` to
    /// `https://example.com/panel/api/client`.
    #[must_use]
    pub fn new(config: &PanelConfig) -> Self {
        let mut base_url = config.base_url().as_url().clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Pterodactyl API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            client: config.http_client().clone(),
            base_url,
            api_key: config.api_key().clone(),
            request_timeout: config.request_timeout(),
            default_headers,
        }
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the default headers for this client.
    ///
    /// The `Authorization` header is added per request and is not listed.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves the full URL for a request, including its query string.
    ///
    /// Pagination options and explicit query parameters replace any value
    /// already present in the path for the same key.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidPath`] if the path cannot be
    /// resolved against the base URL.
    pub fn resolve_url(&self, request: &HttpRequest) -> Result<Url, InvalidHttpRequestError> {
        let mut url =
            self.base_url
                .join(&request.path)
                .map_err(|source| InvalidHttpRequestError::InvalidPath {
                    path: request.path.clone(),
                    source,
                })?;

        let mut overrides = request.query.clone();
        if let Some(pagination) = &request.pagination {
            overrides.extend(pagination.to_query_pairs());
        }
        if overrides.is_empty() {
            return Ok(url);
        }

        let kept: Vec<(String, String)> = url
            .query_pairs()
            .into_owned()
            .filter(|(key, _)| !overrides.iter().any(|(k, _)| k == key))
            .collect();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .extend_pairs(overrides);

        Ok(url)
    }

    /// Builds an authenticated wire request without sending it.
    ///
    /// Sets `Authorization: Bearer <key>`, `Accept: application/json`, the
    /// `User-Agent`, and `Content-Type` only when a body is present.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request fails validation,
    /// its path cannot be resolved, or the transport rejects a header value.
    pub fn build_request(&self, request: &HttpRequest) -> Result<reqwest::Request, HttpError> {
        request.verify()?;
        let url = self.resolve_url(request)?;

        let mut builder = self
            .client
            .request(request.http_method.as_reqwest(), url)
            .bearer_auth(self.api_key.as_ref());

        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }

        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }

        if let (Some(body), Some(body_type)) = (&request.body, &request.body_type) {
            builder = builder
                .header("Content-Type", body_type.as_content_type())
                .body(body.clone());
        }

        Ok(builder.build().map_err(InvalidHttpRequestError::Build)?)
    }

    /// Sends a wire request and classifies the response.
    ///
    /// The body is read once and the connection released. On a 2xx status
    /// the buffered response is returned undecoded.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Network`] for transport failures and timeouts
    /// - [`HttpError::Api`] for non-2xx responses with an error envelope
    /// - [`HttpError::UnparseableErrorBody`] for non-2xx responses without one
    pub async fn execute(&self, request: reqwest::Request) -> Result<HttpResponse, HttpError> {
        tracing::debug!(
            method = %request.method(),
            path = request.url().path(),
            "Sending request to panel"
        );

        let res = self.client.execute(request).await?;
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        tracing::debug!(status = code, bytes = body.len(), "Received panel response");

        let response = HttpResponse::new(code, headers, body);
        if response.is_ok() {
            return Ok(response);
        }

        Err(Self::classify_error(&response))
    }

    /// Sends a wire request and decodes a successful body into `T`.
    ///
    /// # Errors
    ///
    /// Everything [`execute`](Self::execute) returns, plus
    /// [`HttpError::Decode`] if a 2xx body does not match `T`.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        request: reqwest::Request,
    ) -> Result<T, HttpError> {
        self.execute(request).await?.json()
    }

    /// Builds and sends a request, returning the buffered response.
    ///
    /// # Errors
    ///
    /// See [`build_request`](Self::build_request) and
    /// [`execute`](Self::execute).
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let wire = self.build_request(&request)?;
        self.execute(wire).await
    }

    /// Builds and sends a request, decoding a successful body into `T`.
    ///
    /// # Errors
    ///
    /// See [`build_request`](Self::build_request) and
    /// [`execute_json`](Self::execute_json).
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<T, HttpError> {
        let wire = self.build_request(&request)?;
        self.execute_json(wire).await
    }

    fn classify_error(response: &HttpResponse) -> HttpError {
        match serde_json::from_slice::<ErrorEnvelope>(&response.body) {
            Ok(envelope) => ApiError {
                status: response.code,
                errors: envelope.errors,
            }
            .into(),
            Err(source) => {
                tracing::warn!(
                    status = response.code,
                    "Panel returned an error response that is not an error envelope"
                );
                HttpError::UnparseableErrorBody {
                    status: response.code,
                    source,
                }
            }
        }
    }

    fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();

        for (name, value) in headers {
            if let Ok(value_str) = value.to_str() {
                result
                    .entry(name.as_str().to_string())
                    .or_default()
                    .push(value_str.to_string());
            }
        }

        result
    }
}
