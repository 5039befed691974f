use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::models::RenameServerOptions;
use crate::rest;

/// Owner-level settings of one server.
#[derive(Clone, Debug)]
pub struct SettingsService<'a> {
    http: &'a HttpClient,
    path: String,
}

impl<'a> SettingsService<'a> {
    pub(crate) const fn new(http: &'a HttpClient, path: String) -> Self {
        Self { http, path }
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn rename(&self, options: &RenameServerOptions) -> Result<(), HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, format!("{}/rename", self.path))
            .json(options)?
            .build()?;
        rest::send(self.http, request).await
    }

    /// Re-runs the egg's install script.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn reinstall(&self) -> Result<(), HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Post, format!("{}/reinstall", self.path)).build()?;
        rest::send(self.http, request).await
    }
}
