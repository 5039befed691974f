use crate::clients::{HttpClient, HttpError};
use crate::models::{Location, LocationCreateOptions, LocationUpdateOptions};
use crate::rest::{self, Page, PaginationOptions, DEFAULT_PER_PAGE};

const PATH: &str = "api/application/locations";

/// Location management.
#[derive(Clone, Copy, Debug)]
pub struct LocationsService<'a> {
    http: &'a HttpClient,
}

impl<'a> LocationsService<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(
        &self,
        options: Option<PaginationOptions>,
    ) -> Result<Page<Location>, HttpError> {
        rest::list(self.http, PATH, options).await
    }

    /// # Errors
    ///
    /// Returns the first [`HttpError`] from any page.
    pub async fn list_all(&self) -> Result<Vec<Location>, HttpError> {
        rest::list_all(self.http, PATH, DEFAULT_PER_PAGE).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, id: u64) -> Result<Location, HttpError> {
        rest::get(self.http, PATH, id).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create(&self, options: &LocationCreateOptions) -> Result<Location, HttpError> {
        rest::create(self.http, PATH, options).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update(
        &self,
        id: u64,
        options: &LocationUpdateOptions,
    ) -> Result<Location, HttpError> {
        rest::update(self.http, PATH, id, options).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), HttpError> {
        rest::delete(self.http, PATH, id).await
    }
}
