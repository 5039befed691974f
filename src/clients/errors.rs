//! HTTP-specific error types for the Pterodactyl API SDK.
//!
//! This module contains error types for HTTP operations: local request
//! validation failures, transport failures, panel error responses, and body
//! decoding failures.
//!
//! # Error Handling
//!
//! - [`InvalidHttpRequestError`]: The request could not be built locally
//! - [`ApiError`]: The panel answered with a non-2xx status
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! None of these are retried by the SDK.
//!
//! # Example
//!
//! ```rust,ignore
//! use pterodactyl_api::clients::HttpError;
//!
//! match client.application().users().get(42).await {
//!     Ok(user) => println!("Found {}", user.username),
//!     Err(HttpError::Api(e)) if e.is_not_found() => println!("No such user"),
//!     Err(HttpError::Api(e)) => println!("Panel rejected the call: {e}"),
//!     Err(HttpError::Network(e)) => println!("Transport failure: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single entry of the panel's error envelope.
///
/// The panel reports errors as `{"errors": [{"code", "status", "detail"}]}`.
/// Every field is optional because validation errors, exceptions, and
/// proxies in front of the panel all fill in different subsets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code, e.g. `NotFoundHttpException`.
    #[serde(default)]
    pub code: Option<String>,
    /// The HTTP status as reported in the body, e.g. `"404"`.
    #[serde(default)]
    pub status: Option<String>,
    /// Human-readable description.
    #[serde(default)]
    pub detail: Option<String>,
    /// Extra context, such as the offending field for validation errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

/// Error returned when the panel answers with a non-2xx status.
///
/// The status code is always populated; the details are best-effort and
/// come from the decoded error envelope.
///
/// # Example
///
/// ```rust
/// use pterodactyl_api::clients::{ApiError, ApiErrorDetail};
///
/// let error = ApiError {
///     status: 404,
///     errors: vec![ApiErrorDetail {
///         code: Some("NotFoundHttpException".to_string()),
///         status: Some("404".to_string()),
///         detail: Some("The requested resource could not be found.".to_string()),
///         meta: None,
///     }],
/// };
///
/// assert!(error.is_not_found());
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The decoded error entries, in server order.
    pub errors: Vec<ApiErrorDetail>,
}

impl ApiError {
    /// Returns the first error entry, if any.
    #[must_use]
    pub fn first(&self) -> Option<&ApiErrorDetail> {
        self.errors.first()
    }

    /// Returns the code of the first error entry, if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.first().and_then(|e| e.code.as_deref())
    }

    /// Returns the detail of the first error entry, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.first().and_then(|e| e.detail.as_deref())
    }

    /// Returns `true` for HTTP 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Returns `true` for HTTP 422, the panel's validation failure status.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        self.status == 422
    }

    /// Returns `true` for HTTP 409.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        self.status == 409
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error (status {}): ", self.status)?;
        let details: Vec<&str> = self
            .errors
            .iter()
            .filter_map(|e| e.detail.as_deref().or(e.code.as_deref()))
            .collect();
        if details.is_empty() {
            f.write_str("no error details provided")
        } else {
            f.write_str(&details.join("; "))
        }
    }
}

impl std::error::Error for ApiError {}

/// Error returned when an HTTP request cannot be built.
///
/// These are detected before any network I/O. Unknown resource paths are
/// not detected here; the panel answers those with a 404.
#[derive(Debug, Error)]
pub enum InvalidHttpRequestError {
    /// The path could not be resolved against the panel base URL.
    #[error("Invalid request path '{path}': {source}")]
    InvalidPath {
        /// The path that was provided.
        path: String,
        /// The underlying URL parse error.
        #[source]
        source: url::ParseError,
    },

    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The transport rejected the request while assembling it.
    #[error("Failed to build request: {0}")]
    Build(#[source] reqwest::Error),
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust,ignore
/// use pterodactyl_api::HttpError;
///
/// match result {
///     Ok(value) => { /* handle success */ }
///     Err(HttpError::Api(e)) => { /* panel rejected the call */ }
///     Err(HttpError::UnparseableErrorBody { status, .. }) => { /* non-2xx, odd body */ }
///     Err(HttpError::Decode(e)) => { /* 2xx, body did not match */ }
///     Err(HttpError::InvalidRequest(e)) => { /* local validation */ }
///     Err(HttpError::Network(e)) => { /* transport, timeout, cancellation */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, DNS, TLS, or timeout failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The panel answered with a non-2xx status and a decodable error body.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The panel answered with a non-2xx status and a body that is not an
    /// error envelope.
    #[error("API error (status {status}), failed to parse error response: {source}")]
    UnparseableErrorBody {
        /// The HTTP status code of the response.
        status: u16,
        /// The decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// The panel answered with a 2xx status but the body did not match the
    /// expected shape.
    #[error("Failed to decode successful response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl HttpError {
    /// Returns the HTTP status code for errors produced by a panel response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            Self::UnparseableErrorBody { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the structured API error, if this is one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}
