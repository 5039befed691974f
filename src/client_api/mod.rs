//! Client API: end-user access under `/api/client`.
//!
//! Requires a client key (`ptlc_`). Everything is scoped to the account that
//! owns the key. Per-server services are reached through
//! [`ClientApi::servers`] with the server's short identifier.

mod account;
mod backups;
mod databases;
mod files;
mod network;
mod schedules;
mod servers;
mod settings;
mod startup;
mod users;

pub use account::{AccountService, ApiKeysService};
pub use backups::BackupsService;
pub use databases::DatabasesService;
pub use files::FilesService;
pub use network::NetworkService;
pub use schedules::SchedulesService;
pub use servers::ServerService;
pub use settings::SettingsService;
pub use startup::StartupService;
pub use users::SubusersService;

use serde::Deserialize;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::models::{ClientServer, Permissions};
use crate::rest::{self, encode_segment, Envelope, Page, PaginationOptions, DEFAULT_PER_PAGE};

const PATH: &str = "api/client";

/// `{"data": {...}}` bodies some Client API routes return instead of an
/// envelope.
#[derive(Deserialize)]
pub(crate) struct DataWrapper<T> {
    pub(crate) data: T,
}

/// Newer panels wrap the permission catalogue in an envelope; older ones
/// return it bare.
#[derive(Deserialize)]
#[serde(untagged)]
enum PermissionsBody {
    Wrapped(Envelope<Permissions>),
    Bare(Permissions),
}

/// Entry point to the Client API services.
#[derive(Clone, Copy, Debug)]
pub struct ClientApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ClientApi<'a> {
    /// Wraps an [`HttpClient`] configured with a client key.
    #[must_use]
    pub const fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Lists one page of servers the account can access.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_servers(
        &self,
        options: Option<PaginationOptions>,
    ) -> Result<Page<ClientServer>, HttpError> {
        rest::list(self.http, PATH, options).await
    }

    /// Lists every server the account can access.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`] from any page.
    pub async fn list_all_servers(&self) -> Result<Vec<ClientServer>, HttpError> {
        rest::list_all(self.http, PATH, DEFAULT_PER_PAGE).await
    }

    /// Fetches the catalogue of subuser permissions.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn permissions(&self) -> Result<Permissions, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, format!("{PATH}/permissions")).build()?;
        Ok(match self.http.request_json(request).await? {
            PermissionsBody::Wrapped(envelope) => envelope.into_attributes(),
            PermissionsBody::Bare(permissions) => permissions,
        })
    }

    #[must_use]
    pub const fn account(&self) -> AccountService<'a> {
        AccountService::new(self.http)
    }

    /// Returns the services for one server, addressed by its short
    /// identifier or UUID.
    #[must_use]
    pub fn servers(&self, identifier: &str) -> ServerService<'a> {
        ServerService::new(
            self.http,
            format!("{PATH}/servers/{}", encode_segment(identifier)),
        )
    }
}
