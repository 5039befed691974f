//! Application API: administrative access under `/api/application`.
//!
//! Requires an application key (`ptla_`). Services are cheap borrowed views
//! over the client's [`HttpClient`]; create them per call site.
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use pterodactyl_api::{Client, KeyType};
//!
//! let client = Client::new("https://panel.example.com", "ptla_abc", KeyType::Application)?;
//! let users = client.application().users().list_all().await?;
//! let allocations = client.application().nodes().allocations(1).list(None).await?;
//! # let _ = (users, allocations);
//! # Ok(())
//! # }
//! ```

mod locations;
mod nests;
mod nodes;
mod servers;
mod users;

pub use locations::LocationsService;
pub use nests::{EggsService, NestsService};
pub use nodes::{AllocationsService, NodesService};
pub use servers::{DatabasesService, ServersService};
pub use users::UsersService;

use crate::clients::HttpClient;

/// Entry point to the Application API services.
#[derive(Clone, Copy, Debug)]
pub struct Application<'a> {
    http: &'a HttpClient,
}

impl<'a> Application<'a> {
    /// Wraps an [`HttpClient`] configured with an application key.
    #[must_use]
    pub const fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    #[must_use]
    pub const fn users(&self) -> UsersService<'a> {
        UsersService::new(self.http)
    }

    #[must_use]
    pub const fn nodes(&self) -> NodesService<'a> {
        NodesService::new(self.http)
    }

    #[must_use]
    pub const fn locations(&self) -> LocationsService<'a> {
        LocationsService::new(self.http)
    }

    #[must_use]
    pub const fn servers(&self) -> ServersService<'a> {
        ServersService::new(self.http)
    }

    #[must_use]
    pub const fn nests(&self) -> NestsService<'a> {
        NestsService::new(self.http)
    }
}
