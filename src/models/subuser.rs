use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user granted access to a server they do not own.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subuser {
    pub uuid: String,
    pub username: String,
    pub email: String,
    /// Gravatar URL.
    pub image: String,
    #[serde(rename = "2fa_enabled")]
    pub two_factor_enabled: bool,
    pub created_at: Option<DateTime<Utc>>,
    /// Granted permissions, e.g. `"control.console"`.
    pub permissions: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubuserCreateOptions {
    pub email: String,
    pub permissions: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubuserUpdateOptions {
    pub permissions: Vec<String>,
}
