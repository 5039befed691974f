use crate::clients::{HttpClient, HttpError};
use crate::models::{Egg, Nest};
use crate::rest::{self, Page, PaginationOptions, DEFAULT_PER_PAGE};

const PATH: &str = "api/application/nests";

/// Read-only access to nests and their eggs.
#[derive(Clone, Copy, Debug)]
pub struct NestsService<'a> {
    http: &'a HttpClient,
}

impl<'a> NestsService<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(&self, options: Option<PaginationOptions>) -> Result<Page<Nest>, HttpError> {
        rest::list(self.http, PATH, options).await
    }

    /// # Errors
    ///
    /// Returns the first [`HttpError`] from any page.
    pub async fn list_all(&self) -> Result<Vec<Nest>, HttpError> {
        rest::list_all(self.http, PATH, DEFAULT_PER_PAGE).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, id: u64) -> Result<Nest, HttpError> {
        rest::get(self.http, PATH, id).await
    }

    /// Returns the egg service for one nest.
    #[must_use]
    pub fn eggs(&self, nest_id: u64) -> EggsService<'a> {
        EggsService {
            http: self.http,
            path: format!("{PATH}/{nest_id}/eggs"),
        }
    }
}

/// Eggs of a single nest.
#[derive(Clone, Debug)]
pub struct EggsService<'a> {
    http: &'a HttpClient,
    path: String,
}

impl EggsService<'_> {
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(&self, options: Option<PaginationOptions>) -> Result<Page<Egg>, HttpError> {
        rest::list(self.http, &self.path, options).await
    }

    /// # Errors
    ///
    /// Returns the first [`HttpError`] from any page.
    pub async fn list_all(&self) -> Result<Vec<Egg>, HttpError> {
        rest::list_all(self.http, &self.path, DEFAULT_PER_PAGE).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, egg_id: u64) -> Result<Egg, HttpError> {
        rest::get(self.http, &self.path, egg_id).await
    }
}
