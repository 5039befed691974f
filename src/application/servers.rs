use serde::Serialize;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::models::{
    Database, DatabaseCreateOptions, Server, ServerCreateOptions, ServerUpdateBuildOptions,
    ServerUpdateDetailsOptions, ServerUpdateStartupOptions,
};
use crate::rest::{self, encode_segment, Page, PaginationOptions, DEFAULT_PER_PAGE};

const PATH: &str = "api/application/servers";

#[derive(Serialize)]
struct ForceDelete {
    force: bool,
}

/// Server management from the administrative side.
#[derive(Clone, Copy, Debug)]
pub struct ServersService<'a> {
    http: &'a HttpClient,
}

impl<'a> ServersService<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Lists one page of servers.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(
        &self,
        options: Option<PaginationOptions>,
    ) -> Result<Page<Server>, HttpError> {
        rest::list(self.http, PATH, options).await
    }

    /// Lists every server on the panel.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`] from any page.
    pub async fn list_all(&self) -> Result<Vec<Server>, HttpError> {
        rest::list_all(self.http, PATH, DEFAULT_PER_PAGE).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, id: u64) -> Result<Server, HttpError> {
        rest::get(self.http, PATH, id).await
    }

    /// Fetches a server by its external ID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_external(&self, external_id: &str) -> Result<Server, HttpError> {
        let path = format!("{PATH}/external/{}", encode_segment(external_id));
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        rest::fetch(self.http, request).await
    }

    /// Creates a server. Installation continues on the node after the panel
    /// answers.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create(&self, options: &ServerCreateOptions) -> Result<Server, HttpError> {
        rest::create(self.http, PATH, options).await
    }

    /// Updates name, owner, external ID and description.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_details(
        &self,
        id: u64,
        options: &ServerUpdateDetailsOptions,
    ) -> Result<Server, HttpError> {
        self.patch(id, "details", options).await
    }

    /// Updates resource limits and allocations.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_build(
        &self,
        id: u64,
        options: &ServerUpdateBuildOptions,
    ) -> Result<Server, HttpError> {
        self.patch(id, "build", options).await
    }

    /// Updates the startup command, egg, image and environment.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_startup(
        &self,
        id: u64,
        options: &ServerUpdateStartupOptions,
    ) -> Result<Server, HttpError> {
        self.patch(id, "startup", options).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn suspend(&self, id: u64) -> Result<(), HttpError> {
        self.action(id, "suspend").await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn unsuspend(&self, id: u64) -> Result<(), HttpError> {
        self.action(id, "unsuspend").await
    }

    /// Re-runs the egg's install script.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn reinstall(&self, id: u64) -> Result<(), HttpError> {
        self.action(id, "reinstall").await
    }

    /// Deletes a server.
    ///
    /// With `force` the panel removes its record even when the node cannot
    /// be reached.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, id: u64, force: bool) -> Result<(), HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Delete, format!("{PATH}/{id}"));
        if force {
            builder = builder.json(&ForceDelete { force })?;
        }
        rest::send(self.http, builder.build()?).await
    }

    /// Returns the database service for one server.
    #[must_use]
    pub fn databases(&self, server_id: u64) -> DatabasesService<'a> {
        DatabasesService {
            http: self.http,
            path: format!("{PATH}/{server_id}/databases"),
        }
    }

    async fn patch<B: Serialize>(
        &self,
        id: u64,
        section: &str,
        body: &B,
    ) -> Result<Server, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Patch, format!("{PATH}/{id}/{section}"))
            .json(body)?
            .build()?;
        rest::fetch(self.http, request).await
    }

    async fn action(&self, id: u64, action: &str) -> Result<(), HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Post, format!("{PATH}/{id}/{action}")).build()?;
        rest::send(self.http, request).await
    }
}

/// Databases belonging to one server.
#[derive(Clone, Debug)]
pub struct DatabasesService<'a> {
    http: &'a HttpClient,
    path: String,
}

impl DatabasesService<'_> {
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(
        &self,
        options: Option<PaginationOptions>,
    ) -> Result<Page<Database>, HttpError> {
        rest::list(self.http, &self.path, options).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, database_id: u64) -> Result<Database, HttpError> {
        rest::get(self.http, &self.path, database_id).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create(&self, options: &DatabaseCreateOptions) -> Result<Database, HttpError> {
        rest::create(self.http, &self.path, options).await
    }

    /// Generates a new password for the database user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn reset_password(&self, database_id: u64) -> Result<(), HttpError> {
        let path = format!("{}/{database_id}/reset-password", self.path);
        let request = HttpRequest::builder(HttpMethod::Post, path).build()?;
        rest::send(self.http, request).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, database_id: u64) -> Result<(), HttpError> {
        rest::delete(self.http, &self.path, database_id).await
    }
}
