//! Game servers, as seen from both API surfaces.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A server, as seen through the Application API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    pub id: u64,
    pub external_id: Option<String>,
    pub uuid: String,
    /// Short identifier used by the Client API.
    pub identifier: String,
    pub name: String,
    pub description: Option<String>,
    /// Lifecycle state, e.g. `"installing"`; `None` when running normally.
    pub status: Option<String>,
    pub suspended: bool,
    pub limits: ServerLimits,
    pub feature_limits: FeatureLimits,
    /// Owning user ID.
    pub user: u64,
    pub node: u64,
    /// Primary allocation ID.
    pub allocation: u64,
    pub nest: u64,
    pub egg: u64,
    pub container: ContainerDetails,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Resource limits of a server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerLimits {
    /// Memory in MiB; `0` is unlimited.
    pub memory: u64,
    /// Swap in MiB; `-1` is unlimited.
    pub swap: i64,
    /// Disk in MiB; `0` is unlimited.
    pub disk: u64,
    /// Block IO weight (10 to 1000).
    pub io: u64,
    /// CPU limit in percent of one core; `0` is unlimited.
    pub cpu: u64,
    /// CPU pinning, e.g. `"0-1,3"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oom_disabled: Option<bool>,
}

/// Counts of databases, allocations, and backups a server may hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureLimits {
    pub databases: u32,
    pub allocations: u32,
    pub backups: u32,
}

/// Container settings of a server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerDetails {
    pub startup_command: String,
    pub image: String,
    #[serde(deserialize_with = "super::bool_or_int")]
    pub installed: bool,
    /// Egg variables, keyed by environment name.
    pub environment: HashMap<String, serde_json::Value>,
}

/// Allocation choice for a new server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerAllocationOptions {
    /// Primary allocation ID.
    pub default: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional: Vec<u64>,
}

/// Automatic placement for a new server, used instead of an explicit
/// allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerDeployOptions {
    /// Candidate location IDs.
    pub locations: Vec<u64>,
    pub dedicated_ip: bool,
    /// Port ranges to search, e.g. `["25565-25570"]`.
    #[serde(default)]
    pub port_range: Vec<String>,
}

/// Body for creating a server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerCreateOptions {
    pub name: String,
    /// Owning user ID.
    pub user: u64,
    pub egg: u64,
    pub docker_image: String,
    pub startup: String,
    pub environment: HashMap<String, String>,
    pub limits: ServerLimits,
    pub feature_limits: FeatureLimits,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation: Option<ServerAllocationOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy: Option<ServerDeployOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_on_completion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_scripts: Option<bool>,
}

/// Body for `PATCH /servers/{id}/details`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerUpdateDetailsOptions {
    pub name: String,
    /// Owning user ID.
    pub user: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for `PATCH /servers/{id}/build`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerUpdateBuildOptions {
    /// Primary allocation ID.
    pub allocation: u64,
    pub limits: ServerLimits,
    pub feature_limits: FeatureLimits,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_allocations: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove_allocations: Vec<u64>,
}

/// Body for `PATCH /servers/{id}/startup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerUpdateStartupOptions {
    pub startup: String,
    pub environment: HashMap<String, String>,
    pub egg: u64,
    pub image: String,
    #[serde(default)]
    pub skip_scripts: bool,
}

/// A server, as seen through the Client API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientServer {
    /// Whether the key's account owns the server (rather than being a subuser).
    pub server_owner: bool,
    pub identifier: String,
    pub internal_id: u64,
    pub uuid: String,
    pub name: String,
    pub node: String,
    pub sftp_details: SftpDetails,
    pub description: Option<String>,
    pub limits: ServerLimits,
    /// The rendered startup command.
    pub invocation: String,
    pub docker_image: String,
    pub egg_features: Option<Vec<String>>,
    pub feature_limits: FeatureLimits,
    pub status: Option<String>,
    pub is_suspended: bool,
    pub is_installing: bool,
    pub is_transferring: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SftpDetails {
    pub ip: String,
    pub port: u16,
}

/// Credentials for the server console websocket.
///
/// Returned as `{"data": {"token", "socket"}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsocketDetails {
    /// Short-lived JWT to send after connecting.
    pub token: String,
    /// `wss://` URL of the daemon socket.
    pub socket: String,
}

/// Live state and resource usage of a server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceUsage {
    /// `"running"`, `"offline"`, `"starting"`, or `"stopping"`.
    pub current_state: String,
    pub is_suspended: bool,
    pub resources: UsageStats,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageStats {
    pub memory_bytes: u64,
    pub cpu_absolute: f64,
    pub disk_bytes: u64,
    pub network_rx_bytes: u64,
    pub network_tx_bytes: u64,
    /// Milliseconds since the process started.
    pub uptime: u64,
}

/// A power action for a server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerSignal {
    Start,
    Stop,
    Restart,
    Kill,
}

impl fmt::Display for PowerSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Stop => write!(f, "stop"),
            Self::Restart => write!(f, "restart"),
            Self::Kill => write!(f, "kill"),
        }
    }
}

/// Body for renaming a server from the Client API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameServerOptions {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
