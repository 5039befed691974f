//! # Pterodactyl API Rust SDK
//!
//! An async client for the REST APIs of the Pterodactyl game-server panel.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Validated configuration via [`Client::new`] or [`PanelConfig::builder`]
//! - Credential checks that catch a client key used where an application
//!   key is required (and the reverse) before any request is sent
//! - The Application API (`/api/application`) via [`Client::application`]
//! - The Client API (`/api/client`) via [`Client::client_api`]
//! - Generic list/get/create/update/delete primitives and a pagination
//!   walker in [`rest`], usable for routes without a wrapper
//! - Structured errors that keep the panel's `{"errors": [...]}` details
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pterodactyl_api::{Client, KeyType};
//! use pterodactyl_api::rest::PaginationOptions;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("https://panel.example.com", "ptla_abc123", KeyType::Application)?;
//!
//! // One page, with the pagination counters.
//! let page = client
//!     .application()
//!     .servers()
//!     .list(Some(PaginationOptions::new().per_page(25)))
//!     .await?;
//! println!("page {} of {}", page.pagination().current_page, page.pagination().total_pages);
//!
//! // Every user, walking all pages.
//! let users = client.application().users().list_all().await?;
//! println!("{} users", users.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use pterodactyl_api::{Client, HttpError, KeyType};
//!
//! # async fn run(client: Client) {
//! match client.application().users().get(42).await {
//!     Ok(user) => println!("{}", user.username),
//!     Err(HttpError::Api(error)) if error.is_not_found() => println!("no such user"),
//!     Err(error) => eprintln!("request failed: {error}"),
//! }
//! # }
//! ```
//!
//! ## Transport Overrides
//!
//! ```rust
//! use std::time::Duration;
//! use pterodactyl_api::{Client, KeyType, TransportOption};
//!
//! let client = Client::with_options(
//!     "https://panel.example.com",
//!     "ptlc_abc123",
//!     KeyType::Client,
//!     [
//!         TransportOption::Timeout(Duration::from_secs(30)),
//!         TransportOption::UserAgentPrefix("my-bot/1.0".to_string()),
//!     ],
//! )
//! .unwrap();
//! assert_eq!(client.config().timeout(), Duration::from_secs(30));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: URL and key are checked on construction
//! - **Thread-safe**: [`Client`] is `Send + Sync`; services borrow it
//! - **Async-first**: Designed for use with Tokio; dropping a future cancels
//!   the request, and a dropped [`rest::list_all`] stops between pages
//! - **Credentials stay private**: keys are masked in `Debug` output and
//!   never logged

pub mod application;
pub mod client;
pub mod client_api;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod rest;

// Re-export public types at crate root for convenience
pub use client::Client;
pub use config::{
    ApiKey, KeyType, PanelConfig, PanelConfigBuilder, PanelUrl, TransportOption, DEFAULT_TIMEOUT,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, ApiErrorDetail, DataType, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, InvalidHttpRequestError, RateLimit,
};

// Re-export pagination types
pub use rest::{Page, Pagination, PaginationOptions};
