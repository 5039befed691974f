use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::models::{Subuser, SubuserCreateOptions, SubuserUpdateOptions};
use crate::rest::{self, encode_segment, Page, PaginationOptions};

/// Subusers of one server, addressed by UUID.
#[derive(Clone, Debug)]
pub struct SubusersService<'a> {
    http: &'a HttpClient,
    path: String,
}

impl<'a> SubusersService<'a> {
    pub(crate) const fn new(http: &'a HttpClient, path: String) -> Self {
        Self { http, path }
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(
        &self,
        options: Option<PaginationOptions>,
    ) -> Result<Page<Subuser>, HttpError> {
        rest::list(self.http, &self.path, options).await
    }

    /// Invites a user by email with the given permissions.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create(&self, options: &SubuserCreateOptions) -> Result<Subuser, HttpError> {
        rest::create(self.http, &self.path, options).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn details(&self, uuid: &str) -> Result<Subuser, HttpError> {
        rest::get(self.http, &self.path, encode_segment(uuid)).await
    }

    /// Replaces the subuser's permissions.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update(
        &self,
        uuid: &str,
        options: &SubuserUpdateOptions,
    ) -> Result<Subuser, HttpError> {
        let path = format!("{}/{}", self.path, encode_segment(uuid));
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .json(options)?
            .build()?;
        rest::fetch(self.http, request).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, uuid: &str) -> Result<(), HttpError> {
        rest::delete(self.http, &self.path, encode_segment(uuid)).await
    }
}
