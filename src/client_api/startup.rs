use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::models::{StartupVariable, UpdateVariableOptions};
use crate::rest::{self, Page, PaginationOptions};

/// Startup variables of one server.
#[derive(Clone, Debug)]
pub struct StartupService<'a> {
    http: &'a HttpClient,
    path: String,
}

impl<'a> StartupService<'a> {
    pub(crate) const fn new(http: &'a HttpClient, path: String) -> Self {
        Self { http, path }
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_variables(
        &self,
        options: Option<PaginationOptions>,
    ) -> Result<Page<StartupVariable>, HttpError> {
        rest::list(self.http, &self.path, options).await
    }

    /// Sets the value of an editable variable.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails; a value that breaks the
    /// variable's rules is an [`HttpError::Api`] with status 422.
    pub async fn update_variable(
        &self,
        options: &UpdateVariableOptions,
    ) -> Result<StartupVariable, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, format!("{}/variable", self.path))
            .json(options)?
            .build()?;
        rest::fetch(self.http, request).await
    }
}
