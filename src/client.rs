//! The top-level [`Client`].

use crate::application::Application;
use crate::client_api::ClientApi;
use crate::clients::HttpClient;
use crate::config::{ApiKey, KeyType, PanelConfig, PanelUrl, TransportOption};
use crate::error::ConfigError;

/// A configured connection to one panel.
///
/// Holds the validated [`PanelConfig`] and a single [`HttpClient`]. Both API
/// surfaces are borrowed views over that client, so a `Client` can be shared
/// across tasks behind an `Arc` or a plain reference.
///
/// The key type chosen at construction decides which surface the panel will
/// accept: application keys work with [`Client::application`], client keys
/// with [`Client::client_api`].
///
/// # Example
///
/// ```rust
/// use pterodactyl_api::{Client, KeyType};
///
/// let client = Client::new("https://panel.example.com", "ptla_abc123", KeyType::Application)
///     .unwrap();
/// assert_eq!(client.config().key_type(), KeyType::Application);
///
/// // Wrong key class for the declared type.
/// assert!(Client::new("https://panel.example.com", "ptlc_abc123", KeyType::Application).is_err());
/// ```
#[derive(Debug)]
pub struct Client {
    config: PanelConfig,
    http: HttpClient,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client with the default transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the URL is not absolute, the key is empty,
    /// or the key lacks the prefix of `key_type`.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        key_type: KeyType,
    ) -> Result<Self, ConfigError> {
        Self::with_options(base_url, api_key, key_type, Vec::new())
    }

    /// Creates a client, applying transport overrides in order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an invalid URL or key, or when an
    /// override yields a transport that cannot be built.
    pub fn with_options(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        key_type: KeyType,
        options: impl IntoIterator<Item = TransportOption>,
    ) -> Result<Self, ConfigError> {
        let config = PanelConfig::builder()
            .base_url(PanelUrl::new(base_url)?)
            .api_key(ApiKey::new(api_key, key_type)?)
            .options(options)
            .build()?;
        Ok(Self::from_config(config))
    }

    /// Creates a client from an already-built configuration.
    #[must_use]
    pub fn from_config(config: PanelConfig) -> Self {
        let http = HttpClient::new(&config);
        tracing::debug!(
            host = config.base_url().host_name(),
            key_type = %config.key_type(),
            "Created panel client"
        );
        Self { config, http }
    }

    /// Administrative API under `/api/application`.
    #[must_use]
    pub const fn application(&self) -> Application<'_> {
        Application::new(&self.http)
    }

    /// End-user API under `/api/client`.
    #[must_use]
    pub const fn client_api(&self) -> ClientApi<'_> {
        ClientApi::new(&self.http)
    }

    /// The underlying HTTP client, for routes without a wrapper.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }

    #[must_use]
    pub const fn config(&self) -> &PanelConfig {
        &self.config
    }
}
