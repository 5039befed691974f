//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around the panel URL and API key
//! that validate their contents on construction. Invalid values are rejected
//! with clear error messages.

use std::fmt;

use url::Url;

use crate::error::ConfigError;

/// The class of a Pterodactyl API key.
///
/// The panel issues two mutually exclusive kinds of keys. Application keys
/// are created by administrators and authorize `/api/application` routes;
/// client keys belong to a single account and authorize `/api/client` routes.
/// Each kind carries a fixed prefix.
///
/// # Example
///
/// ```rust
/// use pterodactyl_api::KeyType;
///
/// assert_eq!(KeyType::Application.prefix(), "ptla_");
/// assert_eq!(KeyType::Client.prefix(), "ptlc_");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Administrative key (`ptla_` prefix).
    Application,
    /// End-user key (`ptlc_` prefix).
    Client,
}

impl KeyType {
    /// Returns the prefix every key of this type must start with.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Application => "ptla_",
            Self::Client => "ptlc_",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Application => f.write_str("application"),
            Self::Client => f.write_str("client"),
        }
    }
}

/// A validated Pterodactyl API key.
///
/// The key is checked against the prefix required by its [`KeyType`], so an
/// end-user token passed where an administrative token is expected fails
/// here rather than deep inside a resource call.
///
/// # Security
///
/// The `Debug` implementation masks the key value, displaying only the key
/// type, e.g. `ApiKey(application, *****)`.
///
/// # Example
///
/// ```rust
/// use pterodactyl_api::{ApiKey, KeyType};
///
/// let key = ApiKey::new("ptla_abc123", KeyType::Application).unwrap();
/// assert_eq!(key.as_ref(), "ptla_abc123");
/// assert_eq!(format!("{:?}", key), "ApiKey(application, *****)");
///
/// assert!(ApiKey::new("ptla_abc123", KeyType::Client).is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    token: String,
    key_type: KeyType,
}

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCredentialPrefix`] if the key does not
    /// start with the prefix mandated by `key_type`. An empty key has no
    /// prefix and fails the same way.
    pub fn new(token: impl Into<String>, key_type: KeyType) -> Result<Self, ConfigError> {
        let token = token.into();
        if !token.starts_with(key_type.prefix()) {
            return Err(ConfigError::InvalidCredentialPrefix {
                key_type,
                expected_prefix: key_type.prefix(),
            });
        }
        Ok(Self { token, key_type })
    }

    /// Returns the class of this key.
    #[must_use]
    pub const fn key_type(&self) -> KeyType {
        self.key_type
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({}, *****)", self.key_type)
    }
}

/// A validated panel base URL.
///
/// The URL must be absolute and carry a host, e.g.
/// `https://panel.example.com`. Request paths are resolved against it with
/// standard relative-reference resolution, not string concatenation.
///
/// # Example
///
/// ```rust
/// use pterodactyl_api::PanelUrl;
///
/// let url = PanelUrl::new("https://panel.example.com").unwrap();
/// assert_eq!(url.host_name(), Some("panel.example.com"));
///
/// assert!(PanelUrl::new("panel.example.com").is_err());
/// assert!(PanelUrl::new("::not a valid url").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelUrl(Url);

impl PanelUrl {
    /// Creates a new validated panel URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL cannot be parsed,
    /// is not absolute, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let parsed = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if parsed.cannot_be_a_base() || !parsed.has_host() {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw,
                reason: "URL must include a scheme and host".to_string(),
            });
        }

        Ok(Self(parsed))
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }
}

impl AsRef<str> for PanelUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PanelUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_key_accepts_application_prefix() {
        let key = ApiKey::new("ptla_x", KeyType::Application).unwrap();
        assert_eq!(key.as_ref(), "ptla_x");
        assert_eq!(key.key_type(), KeyType::Application);
    }

    #[test]
    fn test_application_key_rejects_client_prefix() {
        let result = ApiKey::new("ptlc_x", KeyType::Application);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidCredentialPrefix {
                key_type: KeyType::Application,
                expected_prefix: "ptla_",
            })
        ));
    }

    #[test]
    fn test_client_key_accepts_client_prefix() {
        assert!(ApiKey::new("ptlc_x", KeyType::Client).is_ok());
    }

    #[test]
    fn test_client_key_rejects_application_prefix() {
        let result = ApiKey::new("ptla_x", KeyType::Client);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidCredentialPrefix {
                key_type: KeyType::Client,
                ..
            })
        ));
    }

    #[test]
    fn test_key_without_prefix_is_rejected() {
        assert!(ApiKey::new("noprefix", KeyType::Application).is_err());
        assert!(ApiKey::new("noprefix", KeyType::Client).is_err());
    }

    #[test]
    fn test_empty_key_fails_prefix_check() {
        assert!(matches!(
            ApiKey::new("", KeyType::Client),
            Err(ConfigError::InvalidCredentialPrefix {
                key_type: KeyType::Client,
                expected_prefix: "ptlc_",
            })
        ));
    }

    #[test]
    fn test_api_key_debug_masks_token() {
        let key = ApiKey::new("ptlc_supersecret", KeyType::Client).unwrap();
        let debug = format!("{key:?}");
        assert!(!debug.contains("supersecret"));
        assert_eq!(debug, "ApiKey(client, *****)");
    }

    #[test]
    fn test_panel_url_accepts_absolute_url() {
        let url = PanelUrl::new("https://panel.example.com").unwrap();
        assert_eq!(url.host_name(), Some("panel.example.com"));
        assert_eq!(url.as_url().scheme(), "https");
    }

    #[test]
    fn test_panel_url_accepts_port_and_path() {
        let url = PanelUrl::new("http://127.0.0.1:8080/panel/").unwrap();
        assert_eq!(url.host_name(), Some("127.0.0.1"));
        assert_eq!(url.as_url().port(), Some(8080));
    }

    #[test]
    fn test_panel_url_rejects_malformed_url() {
        assert!(matches!(
            PanelUrl::new("::not a valid url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_panel_url_rejects_missing_scheme() {
        assert!(PanelUrl::new("panel.example.com").is_err());
    }

    #[test]
    fn test_panel_url_rejects_url_without_host() {
        assert!(PanelUrl::new("mailto:admin@example.com").is_err());
    }

    #[test]
    fn test_key_type_display() {
        assert_eq!(KeyType::Application.to_string(), "application");
        assert_eq!(KeyType::Client.to_string(), "client");
    }
}
