use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file or directory in a server's file system.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileObject {
    pub name: String,
    /// Unix permission string, e.g. `"-rw-r--r--"`.
    pub mode: String,
    /// Octal permission bits, e.g. `"644"`.
    pub mode_bits: String,
    /// Size in bytes.
    pub size: u64,
    pub is_file: bool,
    pub is_symlink: bool,
    pub mimetype: String,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
}

/// A one-time URL for downloading or uploading directly to the daemon.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignedUrl {
    pub url: String,
}

/// One `from`/`to` pair of a rename request, relative to the root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameEntry {
    pub from: String,
    pub to: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameFilesOptions {
    /// Directory the entries are relative to.
    pub root: String,
    pub files: Vec<RenameEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyFileOptions {
    /// Path of the file to duplicate.
    pub location: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressFilesOptions {
    pub root: String,
    pub files: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecompressFileOptions {
    pub root: String,
    /// Archive name, relative to `root`.
    pub file: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFilesOptions {
    pub root: String,
    pub files: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFolderOptions {
    pub root: String,
    pub name: String,
}
