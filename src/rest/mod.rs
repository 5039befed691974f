//! Envelope types and generic operations for panel resources.
//!
//! This module provides the pieces every resource service is built from:
//!
//! - **[`PaginationOptions`]**: page number, page size, and relations to include
//! - **[`Envelope<T>`]** and **[`PaginatedEnvelope<T>`]**: the panel's JSON wrappers
//! - **[`Meta`]** and **[`Pagination`]**: list metadata
//! - **[`Page<T>`]**: a Deref-based wrapper around one page of items
//! - **Generic operations**: [`list`], [`list_all`], [`get`], [`delete`],
//!   [`create`], [`update`], plus [`fetch`] and [`send`] for one-off routes
//!
//! # Example
//!
//! ```rust,ignore
//! use pterodactyl_api::models::Location;
//! use pterodactyl_api::rest::{self, PaginationOptions};
//!
//! let http = client.http();
//!
//! // One page
//! let page = rest::list::<Location>(http, "api/application/locations",
//!     Some(PaginationOptions::new().per_page(10))).await?;
//!
//! // Every page, in order
//! let all: Vec<Location> = rest::list_all(http, "api/application/locations", 0).await?;
//!
//! // One item
//! let location: Location = rest::get(http, "api/application/locations", 1).await?;
//!
//! // Remove it
//! rest::delete(http, "api/application/locations", 1).await?;
//! ```

mod crud;
mod envelope;
mod pagination;
mod response;

pub use crud::{create, delete, encode_segment, fetch, get, list, list_all, send, update};
pub use envelope::{Envelope, PaginatedEnvelope};
pub use pagination::{Meta, Pagination, PaginationOptions, DEFAULT_PER_PAGE};
pub use response::Page;
