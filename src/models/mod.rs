//! Data types for panel resources.
//!
//! Every resource type is the `attributes` object of the panel's envelope.
//! Fields the panel may omit or send as `null` are `Option`s or carry a
//! serde default, so a panel that adds fields does not break decoding.
//!
//! Request bodies are separate `*Options` types; their optional fields are
//! skipped when unset.

mod account;
mod application;
mod backup;
mod database;
mod file;
mod network;
mod schedule;
mod server;
mod startup;
mod subuser;
mod user;

pub use account::{
    Account, AccountApiKey, ApiKeyCreateOptions, PermissionGroup, Permissions,
    TwoFactorDetails, TwoFactorDisableOptions, TwoFactorEnableOptions, UpdateEmailOptions,
    UpdatePasswordOptions,
};
pub use application::{
    AllocatedResources, Allocation, AllocationCreateOptions, Egg, EggConfig, EggScript,
    Location, LocationCreateOptions, LocationUpdateOptions, Nest, Node, NodeApiConfiguration,
    NodeConfiguration, NodeCreateOptions, NodeSftpConfiguration, NodeSslConfiguration,
    NodeSystemConfiguration, NodeUpdateOptions,
};
pub use backup::{Backup, BackupCreateOptions, BackupDownload};
pub use database::{
    ClientDatabase, ClientDatabaseCreateOptions, Database, DatabaseCreateOptions, DatabaseHost,
};
pub use file::{
    CompressFilesOptions, CopyFileOptions, CreateFolderOptions, DecompressFileOptions,
    DeleteFilesOptions, FileObject, RenameEntry, RenameFilesOptions, SignedUrl,
};
pub use network::{AllocationNoteOptions, NetworkAllocation};
pub use schedule::{
    Schedule, ScheduleCreateOptions, ScheduleCron, ScheduleUpdateOptions, Task,
    TaskCreateOptions, TaskUpdateOptions,
};
pub use server::{
    ClientServer, ContainerDetails, FeatureLimits, PowerSignal, RenameServerOptions,
    ResourceUsage, Server, ServerAllocationOptions, ServerCreateOptions, ServerDeployOptions,
    ServerLimits, ServerUpdateBuildOptions, ServerUpdateDetailsOptions,
    ServerUpdateStartupOptions, SftpDetails, UsageStats, WebsocketDetails,
};
pub use startup::{StartupVariable, UpdateVariableOptions};
pub use subuser::{Subuser, SubuserCreateOptions, SubuserUpdateOptions};
pub use user::{User, UserCreateOptions, UserUpdateOptions};

use serde::{Deserialize, Deserializer};

/// Decodes a flag the panel sends either as a JSON boolean or as `0`/`1`.
pub(crate) fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(value)) => value,
        Some(Flag::Int(value)) => value != 0,
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "bool_or_int")]
        flag: bool,
    }

    #[test]
    fn test_bool_or_int_accepts_both_forms() {
        let parse = |json: &str| serde_json::from_str::<Holder>(json).unwrap().flag;
        assert!(parse(r#"{"flag": true}"#));
        assert!(parse(r#"{"flag": 1}"#));
        assert!(!parse(r#"{"flag": 0}"#));
        assert!(!parse(r#"{"flag": null}"#));
        assert!(!parse("{}"));
    }
}
