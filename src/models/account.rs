//! The account behind a client key, its API keys, and the permission
//! catalogue.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The account that owns the configured client key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: u64,
    pub admin: bool,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub language: String,
}

/// Enrollment data for two-factor authentication.
///
/// Returned as `{"data": {...}}` without the usual envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoFactorDetails {
    /// `otpauth://` URL (older panels) or QR code data URL.
    pub image_url_data: String,
    /// The TOTP secret, on panels that expose it.
    pub secret: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoFactorEnableOptions {
    /// Current TOTP code.
    pub code: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoFactorDisableOptions {
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEmailOptions {
    pub email: String,
    /// Current account password.
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePasswordOptions {
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
}

/// A client API key of the account.
///
/// The secret part is never listed; it is only returned once, on creation.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountApiKey {
    /// Public identifier, used to delete the key.
    pub identifier: String,
    pub description: String,
    pub allowed_ips: Vec<String>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    /// Full secret token. Only set on the value returned by create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl std::fmt::Debug for AccountApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountApiKey")
            .field("identifier", &self.identifier)
            .field("description", &self.description)
            .field("allowed_ips", &self.allowed_ips)
            .field("last_used_at", &self.last_used_at)
            .field("created_at", &self.created_at)
            .field("token", &self.token.as_ref().map(|_| "*****"))
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyCreateOptions {
    pub description: String,
    /// IPs or CIDR ranges allowed to use the key; empty allows any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_ips: Vec<String>,
}

/// Every subuser permission the panel knows, grouped by area.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permissions {
    /// Groups keyed by area, e.g. `"control"` or `"file"`.
    pub permissions: HashMap<String, PermissionGroup>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionGroup {
    pub description: String,
    /// Permission name to its description. The full permission is
    /// `"{group}.{key}"`.
    pub keys: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_debug_masks_token() {
        let key = AccountApiKey {
            identifier: "abc".to_string(),
            token: Some("ptlc_secretsecret".to_string()),
            ..AccountApiKey::default()
        };
        let debug = format!("{key:?}");
        assert!(debug.contains("abc"));
        assert!(!debug.contains("secretsecret"));
    }

    #[test]
    fn test_permissions_deserialize() {
        let json = r#"{"permissions": {"control": {"description": "Power", "keys": {"start": "Start the server"}}}}"#;
        let permissions: Permissions = serde_json::from_str(json).unwrap();
        assert_eq!(
            permissions.permissions["control"].keys["start"],
            "Start the server"
        );
    }
}
