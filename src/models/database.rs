use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A server database, as seen through the Application API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Database {
    pub id: u64,
    /// Owning server ID.
    pub server: u64,
    /// Database host ID.
    pub host: u64,
    pub database: String,
    pub username: String,
    /// Hosts allowed to connect, e.g. `"%"`.
    pub remote: String,
    pub max_connections: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for creating a database from the Application API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseCreateOptions {
    pub database: String,
    pub remote: String,
    /// Database host ID.
    pub host: u64,
}

/// A server database, as seen through the Client API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientDatabase {
    /// Opaque hashed ID.
    pub id: String,
    pub host: DatabaseHost,
    pub name: String,
    pub username: String,
    pub connections_from: String,
    pub max_connections: u32,
    /// Only present after creation or a password rotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseHost {
    pub address: String,
    pub port: u16,
}

/// Body for creating a database from the Client API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDatabaseCreateOptions {
    pub database: String,
    /// Hosts allowed to connect, e.g. `"%"`.
    pub remote: String,
}
