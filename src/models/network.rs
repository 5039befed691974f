use serde::{Deserialize, Serialize};

/// An allocation assigned to a server, as seen through the Client API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkAllocation {
    pub id: u64,
    pub ip: String,
    pub ip_alias: Option<String>,
    pub port: u16,
    pub notes: Option<String>,
    /// Whether this is the server's primary allocation.
    pub is_default: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationNoteOptions {
    /// New note; `None` clears it.
    pub notes: Option<String>,
}
