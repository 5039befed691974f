use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::models::{AllocationNoteOptions, NetworkAllocation};
use crate::rest::{self, Page, PaginationOptions};

/// Allocations assigned to one server.
#[derive(Clone, Debug)]
pub struct NetworkService<'a> {
    http: &'a HttpClient,
    path: String,
}

impl<'a> NetworkService<'a> {
    pub(crate) const fn new(http: &'a HttpClient, path: String) -> Self {
        Self { http, path }
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_allocations(
        &self,
        options: Option<PaginationOptions>,
    ) -> Result<Page<NetworkAllocation>, HttpError> {
        rest::list(self.http, &self.path, options).await
    }

    /// Assigns a free allocation from the node, when the server's feature
    /// limits allow another one.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn assign_allocation(&self) -> Result<NetworkAllocation, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, self.path.as_str()).build()?;
        rest::fetch(self.http, request).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn set_allocation_note(
        &self,
        allocation_id: u64,
        options: &AllocationNoteOptions,
    ) -> Result<NetworkAllocation, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Post, format!("{}/{allocation_id}", self.path))
                .json(options)?
                .build()?;
        rest::fetch(self.http, request).await
    }

    /// Makes an allocation the server's primary one.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn set_primary_allocation(
        &self,
        allocation_id: u64,
    ) -> Result<NetworkAllocation, HttpError> {
        let path = format!("{}/{allocation_id}/primary", self.path);
        let request = HttpRequest::builder(HttpMethod::Post, path).build()?;
        rest::fetch(self.http, request).await
    }

    /// Releases an allocation. The primary allocation cannot be released.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn unassign_allocation(&self, allocation_id: u64) -> Result<(), HttpError> {
        rest::delete(self.http, &self.path, allocation_id).await
    }
}
