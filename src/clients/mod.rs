//! HTTP client types for Pterodactyl panel communication.
//!
//! This module provides the foundational HTTP layer: building authenticated
//! requests against the panel base URL and turning responses into either a
//! decoded value or a classified [`HttpError`].
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for panel communication
//! - [`HttpRequest`]: A request to be sent to the panel
//! - [`HttpResponse`]: A buffered response from the panel
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`ApiError`]: A decoded panel error envelope
//!
//! # Example
//!
//! ```rust,ignore
//! use pterodactyl_api::clients::{HttpClient, HttpMethod, HttpRequest};
//! use pterodactyl_api::rest::PaginationOptions;
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "api/application/nodes")
//!     .pagination(PaginationOptions::new().per_page(10))
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Error Behavior
//!
//! Requests are sent exactly once. A non-2xx response is returned as
//! [`HttpError::Api`] when its body is a panel error envelope and as
//! [`HttpError::UnparseableErrorBody`] otherwise.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiError, ApiErrorDetail, HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};
