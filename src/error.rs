//! Error types for the Pterodactyl API SDK.
//!
//! This module contains the error type returned while validating a panel
//! configuration. Everything here is detected at construction time, before
//! any network I/O.
//!
//! # Example
//!
//! ```rust
//! use pterodactyl_api::{ApiKey, ConfigError, KeyType};
//!
//! let result = ApiKey::new("ptlc_abc", KeyType::Application);
//! assert!(matches!(result, Err(ConfigError::InvalidCredentialPrefix { .. })));
//! ```

use thiserror::Error;

use crate::config::KeyType;

/// Errors that can occur during SDK configuration.
///
/// Each variant carries enough context to tell the caller which argument
/// was wrong.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API key does not carry the prefix required by its key type.
    #[error("Invalid {key_type} key: must start with '{expected_prefix}'.")]
    InvalidCredentialPrefix {
        /// The key type the credential was declared as.
        key_type: KeyType,
        /// The prefix that key type requires.
        expected_prefix: &'static str,
    },

    /// The panel base URL is not an absolute URL with a host.
    #[error("Invalid base URL '{url}': {reason}. Expected an absolute URL such as 'https://panel.example.com'.")]
    InvalidBaseUrl {
        /// The URL that was provided.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClientBuild(#[source] reqwest::Error),
}
