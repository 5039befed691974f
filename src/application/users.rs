use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::models::{User, UserCreateOptions, UserUpdateOptions};
use crate::rest::{self, encode_segment, Page, PaginationOptions, DEFAULT_PER_PAGE};

const PATH: &str = "api/application/users";

/// Panel user management.
#[derive(Clone, Copy, Debug)]
pub struct UsersService<'a> {
    http: &'a HttpClient,
}

impl<'a> UsersService<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Lists one page of users.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(&self, options: Option<PaginationOptions>) -> Result<Page<User>, HttpError> {
        rest::list(self.http, PATH, options).await
    }

    /// Lists every user, walking all pages.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`] from any page.
    pub async fn list_all(&self) -> Result<Vec<User>, HttpError> {
        rest::list_all(self.http, PATH, DEFAULT_PER_PAGE).await
    }

    /// Fetches a user by panel ID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, id: u64) -> Result<User, HttpError> {
        rest::get(self.http, PATH, id).await
    }

    /// Fetches a user by the ID an external system assigned.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_external(&self, external_id: &str) -> Result<User, HttpError> {
        let path = format!("{PATH}/external/{}", encode_segment(external_id));
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        rest::fetch(self.http, request).await
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails; validation failures are
    /// an [`HttpError::Api`] with status 422.
    pub async fn create(&self, options: &UserCreateOptions) -> Result<User, HttpError> {
        rest::create(self.http, PATH, options).await
    }

    /// Updates a user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update(&self, id: u64, options: &UserUpdateOptions) -> Result<User, HttpError> {
        rest::update(self.http, PATH, id, options).await
    }

    /// Deletes a user. The panel refuses while the user owns servers.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), HttpError> {
        rest::delete(self.http, PATH, id).await
    }
}
