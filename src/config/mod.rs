//! Configuration types for the Pterodactyl API SDK.
//!
//! This module provides the configuration used to talk to a panel.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PanelConfig`]: The validated, immutable configuration
//! - [`PanelConfigBuilder`]: A builder for constructing [`PanelConfig`] instances
//! - [`TransportOption`]: Ordered overrides for the underlying HTTP transport
//! - [`ApiKey`]: A validated API key newtype bound to a [`KeyType`]
//! - [`PanelUrl`]: A validated panel base URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use pterodactyl_api::{ApiKey, KeyType, PanelConfig, PanelUrl, TransportOption};
//!
//! let config = PanelConfig::builder()
//!     .base_url(PanelUrl::new("https://panel.example.com").unwrap())
//!     .api_key(ApiKey::new("ptla_abc123", KeyType::Application).unwrap())
//!     .option(TransportOption::Timeout(Duration::from_secs(30)))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(30));
//! ```

mod newtypes;

pub use newtypes::{ApiKey, KeyType, PanelUrl};

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Timeout of the default transport, used until an option replaces it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Hook that reconfigures the lower-level HTTP connector.
pub type TransportHook = Box<dyn FnOnce(reqwest::ClientBuilder) -> reqwest::ClientBuilder + Send>;

/// An override for the HTTP transport.
///
/// Options are applied strictly in the order they were added to the
/// builder, on top of the default transport (rustls, 10 second timeout).
/// Later options win on conflicting fields:
///
/// - A `Timeout` before any `HttpClient` or `Transport` option seeds the
///   transport the config builds.
/// - A `Timeout` after one of them is set on every request, overriding the
///   timeout of the supplied client.
/// - An `HttpClient` or `Transport` after a `Timeout` keeps its own timeout.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use pterodactyl_api::TransportOption;
///
/// let options = vec![
///     TransportOption::transport(|builder| builder.pool_max_idle_per_host(4)),
///     TransportOption::Timeout(Duration::from_secs(5)),
/// ];
/// assert_eq!(options.len(), 2);
/// ```
pub enum TransportOption {
    /// Replaces the HTTP client wholesale, including its timeout.
    HttpClient(reqwest::Client),
    /// Builds the client from a default `reqwest::ClientBuilder` passed
    /// through the hook.
    ///
    /// The builder starts with rustls and the timeout configured so far; the
    /// hook may change either. A built `reqwest::Client` cannot be
    /// reconfigured, so a hook placed after an `HttpClient` option discards
    /// that client and all of its settings.
    Transport(TransportHook),
    /// Changes the per-request timeout.
    Timeout(Duration),
    /// Prefixes the `User-Agent` header sent with every request.
    UserAgentPrefix(String),
}

impl TransportOption {
    /// Convenience constructor for [`TransportOption::Transport`].
    pub fn transport<F>(hook: F) -> Self
    where
        F: FnOnce(reqwest::ClientBuilder) -> reqwest::ClientBuilder + Send + 'static,
    {
        Self::Transport(Box::new(hook))
    }
}

impl fmt::Debug for TransportOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpClient(_) => f.write_str("HttpClient(..)"),
            Self::Transport(_) => f.write_str("Transport(..)"),
            Self::Timeout(timeout) => f.debug_tuple("Timeout").field(timeout).finish(),
            Self::UserAgentPrefix(prefix) => {
                f.debug_tuple("UserAgentPrefix").field(prefix).finish()
            }
        }
    }
}

/// Configuration for the Pterodactyl API SDK.
///
/// Holds the panel URL, the credential, and the shared transport. A config
/// is immutable once built.
///
/// # Thread Safety
///
/// `PanelConfig` is `Clone`, `Send`, and `Sync`. Cloning shares the
/// underlying connection pool.
#[derive(Clone, Debug)]
pub struct PanelConfig {
    base_url: PanelUrl,
    api_key: ApiKey,
    http_client: reqwest::Client,
    timeout: Duration,
    request_timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl PanelConfig {
    /// Creates a new builder for constructing a `PanelConfig`.
    #[must_use]
    pub fn builder() -> PanelConfigBuilder {
        PanelConfigBuilder::new()
    }

    /// Returns the panel base URL.
    #[must_use]
    pub const fn base_url(&self) -> &PanelUrl {
        &self.base_url
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the class of the configured API key.
    #[must_use]
    pub const fn key_type(&self) -> KeyType {
        self.api_key.key_type()
    }

    /// Returns the shared HTTP transport.
    #[must_use]
    pub const fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Returns the last configured timeout.
    ///
    /// This is the timeout of any transport the builder created. A client
    /// supplied through [`TransportOption::HttpClient`] keeps its own unless
    /// a later [`TransportOption::Timeout`] follows it.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the timeout to set on each request, if the transport's own
    /// timeout must be overridden.
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify PanelConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PanelConfig>();
};

/// Builder for constructing [`PanelConfig`] instances.
///
/// Required fields are `base_url` and `api_key`.
///
/// # Defaults
///
/// - transport: `reqwest` client with rustls
/// - timeout: [`DEFAULT_TIMEOUT`] (10 seconds)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct PanelConfigBuilder {
    base_url: Option<PanelUrl>,
    api_key: Option<ApiKey>,
    options: Vec<TransportOption>,
}

impl PanelConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the panel base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: PanelUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Appends a transport override.
    #[must_use]
    pub fn option(mut self, option: TransportOption) -> Self {
        self.options.push(option);
        self
    }

    /// Appends several transport overrides, preserving their order.
    #[must_use]
    pub fn options(mut self, options: impl IntoIterator<Item = TransportOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Builds the [`PanelConfig`], applying transport overrides in order.
    ///
    /// No network I/O happens here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or
    /// `api_key` is not set, and [`ConfigError::HttpClientBuild`] if a
    /// transport hook produces a client that cannot be built.
    pub fn build(self) -> Result<PanelConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let mut http_client = None;
        let mut timeout = DEFAULT_TIMEOUT;
        let mut request_timeout = None;
        let mut user_agent_prefix = None;

        for option in self.options {
            match option {
                TransportOption::HttpClient(client) => {
                    http_client = Some(client);
                    request_timeout = None;
                }
                TransportOption::Transport(hook) => {
                    let builder = hook(default_transport(timeout));
                    http_client = Some(builder.build().map_err(ConfigError::HttpClientBuild)?);
                    request_timeout = None;
                }
                TransportOption::Timeout(value) => {
                    timeout = value;
                    request_timeout = http_client.is_some().then_some(value);
                }
                TransportOption::UserAgentPrefix(prefix) => user_agent_prefix = Some(prefix),
            }
        }

        let http_client = match http_client {
            Some(client) => client,
            None => default_transport(timeout)
                .build()
                .map_err(ConfigError::HttpClientBuild)?,
        };

        Ok(PanelConfig {
            base_url,
            api_key,
            http_client,
            timeout,
            request_timeout,
            user_agent_prefix,
        })
    }
}

fn default_transport(timeout: Duration) -> reqwest::ClientBuilder {
    reqwest::Client::builder().use_rustls_tls().timeout(timeout)
}
