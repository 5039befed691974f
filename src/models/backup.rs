use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A server backup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Backup {
    pub uuid: String,
    pub is_successful: bool,
    /// Locked backups cannot be deleted.
    pub is_locked: bool,
    pub name: String,
    pub ignored_files: Vec<String>,
    pub checksum: Option<String>,
    /// Size in bytes.
    pub bytes: u64,
    pub created_at: Option<DateTime<Utc>>,
    /// `None` while the backup is still running.
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupCreateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Newline-separated ignore patterns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignored: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
}

/// A one-time URL for downloading a backup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupDownload {
    pub url: String,
}
