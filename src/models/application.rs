//! Infrastructure resources managed through the Application API: nodes,
//! their allocations, locations, nests, and eggs.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Wings node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    pub id: u64,
    pub uuid: String,
    /// Whether the node is available for automatic deployment.
    pub public: bool,
    pub name: String,
    pub description: Option<String>,
    pub location_id: u64,
    /// Fully qualified domain name or IP the panel reaches the daemon on.
    pub fqdn: String,
    /// `"http"` or `"https"`.
    pub scheme: String,
    pub behind_proxy: bool,
    pub maintenance_mode: bool,
    /// Total memory in MiB.
    pub memory: u64,
    /// Memory overallocation in percent; `-1` disables the check.
    pub memory_overallocate: i64,
    /// Total disk in MiB.
    pub disk: u64,
    /// Disk overallocation in percent; `-1` disables the check.
    pub disk_overallocate: i64,
    /// Maximum upload size in MiB.
    pub upload_size: u64,
    pub daemon_listen: u16,
    pub daemon_sftp: u16,
    pub daemon_base: String,
    pub allocated_resources: Option<AllocatedResources>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Memory and disk already promised to servers on a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatedResources {
    pub memory: u64,
    pub disk: u64,
}

/// Body for creating a node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCreateOptions {
    pub name: String,
    pub location_id: u64,
    pub fqdn: String,
    pub scheme: String,
    pub memory: u64,
    pub memory_overallocate: i64,
    pub disk: u64,
    pub disk_overallocate: i64,
    pub upload_size: u64,
    pub daemon_sftp: u16,
    pub daemon_listen: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behind_proxy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_base: Option<String>,
}

/// Body for updating a node. Unset fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behind_proxy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_overallocate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_overallocate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_sftp: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_listen: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_base: Option<String>,
}

/// The Wings configuration file the panel generates for a node.
///
/// Returned without an envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfiguration {
    pub debug: bool,
    pub uuid: String,
    pub token_id: String,
    pub token: String,
    pub api: NodeApiConfiguration,
    pub system: NodeSystemConfiguration,
    pub allowed_mounts: Vec<String>,
    /// Panel URL the daemon calls back to.
    pub remote: String,
}

/// The `api` block of a node configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeApiConfiguration {
    pub host: String,
    pub port: u16,
    pub ssl: NodeSslConfiguration,
    /// Upload limit in MiB.
    pub upload_limit: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSslConfiguration {
    pub enabled: bool,
    pub cert: String,
    pub key: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSystemConfiguration {
    pub data: String,
    pub sftp: NodeSftpConfiguration,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSftpConfiguration {
    pub bind_port: u16,
}

/// An IP and port pair on a node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Allocation {
    pub id: u64,
    pub ip: String,
    pub alias: Option<String>,
    pub port: u16,
    pub notes: Option<String>,
    /// Whether a server holds this allocation.
    pub assigned: bool,
}

/// Body for adding allocations to a node.
///
/// `ports` entries are single ports (`"25565"`) or ranges (`"25565-25570"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationCreateOptions {
    pub ip: String,
    pub ports: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// A named group of nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub id: u64,
    /// Short code, e.g. `"us.nyc"`.
    pub short: String,
    /// Long description.
    pub long: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for creating a location.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCreateOptions {
    pub short: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
}

/// Body for updating a location. Unset fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
}

/// A category of eggs, e.g. "Minecraft".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nest {
    pub id: u64,
    pub uuid: String,
    pub author: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A server template within a nest.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Egg {
    pub id: u64,
    pub uuid: String,
    pub name: String,
    pub nest: u64,
    pub author: String,
    pub description: Option<String>,
    /// Default image used when creating servers.
    pub docker_image: String,
    /// Selectable images, keyed by display name.
    pub docker_images: HashMap<String, String>,
    pub config: EggConfig,
    pub startup: String,
    pub script: EggScript,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Daemon-side configuration of an egg.
///
/// The inner blocks are free-form and kept as raw JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EggConfig {
    pub files: serde_json::Value,
    pub startup: serde_json::Value,
    pub stop: String,
    pub logs: serde_json::Value,
    pub file_denylist: Vec<String>,
    pub extends: Option<String>,
}

/// The installation script of an egg.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EggScript {
    pub privileged: bool,
    pub install: Option<String>,
    pub entry: String,
    pub container: String,
    pub extends: Option<String>,
}
