//! HTTP request types for the Pterodactyl API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! describing requests to the panel. An `HttpRequest` is transport-neutral;
//! [`HttpClient::build_request`](crate::clients::HttpClient::build_request)
//! turns it into an authenticated wire request.

use std::fmt;

use serde::Serialize;

use crate::clients::errors::InvalidHttpRequestError;
use crate::rest::PaginationOptions;

/// HTTP methods used by the Pterodactyl API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and triggering actions.
    Post,
    /// HTTP PUT method for replacing values.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    pub(crate) const fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
    /// Plain text content type (`text/plain`), used for raw file writes.
    Text,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Text => "text/plain",
        }
    }
}

/// An HTTP request to be sent to the panel.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use pterodactyl_api::clients::{DataType, HttpMethod, HttpRequest};
/// use pterodactyl_api::rest::PaginationOptions;
///
/// // Paginated GET request
/// let list = HttpRequest::builder(HttpMethod::Get, "/api/application/users")
///     .pagination(PaginationOptions::new().page(2).per_page(50))
///     .build()
///     .unwrap();
///
/// // POST request with JSON body
/// let create = HttpRequest::builder(HttpMethod::Post, "/api/application/locations")
///     .json(&serde_json::json!({"short": "eu", "long": "Europe"}))
///     .unwrap()
///     .build()
///     .unwrap();
/// assert_eq!(create.body_type, Some(DataType::Json));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path, resolved against the panel base URL.
    pub path: String,
    /// The serialized request body, if any.
    pub body: Option<String>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Extra query parameters, in insertion order.
    pub query: Vec<(String, String)>,
    /// Page, page size, and relations to include.
    pub pagination: Option<PaginationOptions>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBodyType`] if `body` is
    /// `Some` but `body_type` is `None`.
    pub const fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }
        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<String>,
    body_type: Option<DataType>,
    query: Vec<(String, String)>,
    pagination: Option<PaginationOptions>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            body_type: None,
            query: Vec::new(),
            pagination: None,
        }
    }

    /// Sets a pre-serialized request body.
    ///
    /// When setting a body, you must also set the body type via
    /// [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Serializes `value` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::Serialize`] if `value` cannot be
    /// represented as JSON.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, InvalidHttpRequestError> {
        let body = serde_json::to_string(value).map_err(InvalidHttpRequestError::Serialize)?;
        Ok(self.body(body).body_type(DataType::Json))
    }

    /// Sets a raw text body.
    #[must_use]
    pub fn text(self, body: impl Into<String>) -> Self {
        self.body(body).body_type(DataType::Text)
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets the pagination options.
    #[must_use]
    pub fn pagination(mut self, options: PaginationOptions) -> Self {
        self.pagination = Some(options);
        self
    }

    /// Sets the pagination options if present.
    #[must_use]
    pub fn maybe_pagination(mut self, options: Option<PaginationOptions>) -> Self {
        self.pagination = options;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            body_type: self.body_type,
            query: self.query,
            pagination: self.pagination,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_data_type_content_type() {
        assert_eq!(DataType::Json.as_content_type(), "application/json");
        assert_eq!(DataType::Text.as_content_type(), "text/plain");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "/api/application/nodes")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "/api/application/nodes");
        assert!(request.body.is_none());
        assert!(request.body_type.is_none());
        assert!(request.pagination.is_none());
    }

    #[test]
    fn test_builder_allows_post_without_body() {
        let request = HttpRequest::builder(HttpMethod::Post, "/api/application/servers/1/suspend")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Post);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_builder_json_sets_body_and_type() {
        let request = HttpRequest::builder(HttpMethod::Post, "/api/application/locations")
            .json(&json!({"short": "us"}))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.body.as_deref(), Some(r#"{"short":"us"}"#));
        assert_eq!(request.body_type, Some(DataType::Json));
    }

    #[test]
    fn test_builder_text_sets_body_and_type() {
        let request = HttpRequest::builder(HttpMethod::Post, "/files/write")
            .text("hello")
            .build()
            .unwrap();

        assert_eq!(request.body.as_deref(), Some("hello"));
        assert_eq!(request.body_type, Some(DataType::Text));
    }

    #[test]
    fn test_verify_requires_body_type_when_body_present() {
        let result = HttpRequest::builder(HttpMethod::Post, "test")
            .body("{}")
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBodyType)
        ));
    }

    #[test]
    fn test_builder_keeps_query_param_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "files/list")
            .query_param("directory", "/")
            .query_param("b", "2")
            .build()
            .unwrap();

        assert_eq!(
            request.query,
            vec![
                ("directory".to_string(), "/".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_builder_with_pagination() {
        let request = HttpRequest::builder(HttpMethod::Get, "users")
            .pagination(PaginationOptions::new().page(3))
            .build()
            .unwrap();

        assert_eq!(request.pagination.and_then(|p| p.page), Some(3));
    }
}
