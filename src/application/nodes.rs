use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::models::{
    Allocation, AllocationCreateOptions, Node, NodeConfiguration, NodeCreateOptions,
    NodeUpdateOptions,
};
use crate::rest::{self, Page, PaginationOptions, DEFAULT_PER_PAGE};

const PATH: &str = "api/application/nodes";

/// Node management.
#[derive(Clone, Copy, Debug)]
pub struct NodesService<'a> {
    http: &'a HttpClient,
}

impl<'a> NodesService<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Lists one page of nodes.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(&self, options: Option<PaginationOptions>) -> Result<Page<Node>, HttpError> {
        rest::list(self.http, PATH, options).await
    }

    /// Lists every node, walking all pages.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`] from any page.
    pub async fn list_all(&self) -> Result<Vec<Node>, HttpError> {
        rest::list_all(self.http, PATH, DEFAULT_PER_PAGE).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, id: u64) -> Result<Node, HttpError> {
        rest::get(self.http, PATH, id).await
    }

    /// Fetches the Wings configuration for a node.
    ///
    /// The response contains the daemon's authentication token.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn configuration(&self, node_id: u64) -> Result<NodeConfiguration, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, format!("{PATH}/{node_id}/configuration"))
                .build()?;
        self.http.request_json(request).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create(&self, options: &NodeCreateOptions) -> Result<Node, HttpError> {
        rest::create(self.http, PATH, options).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update(&self, id: u64, options: &NodeUpdateOptions) -> Result<Node, HttpError> {
        rest::update(self.http, PATH, id, options).await
    }

    /// Deletes a node. The panel refuses while servers are placed on it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), HttpError> {
        rest::delete(self.http, PATH, id).await
    }

    /// Returns the allocation service for one node.
    #[must_use]
    pub fn allocations(&self, node_id: u64) -> AllocationsService<'a> {
        AllocationsService {
            http: self.http,
            path: format!("{PATH}/{node_id}/allocations"),
        }
    }
}

/// Allocation management for a single node.
#[derive(Clone, Debug)]
pub struct AllocationsService<'a> {
    http: &'a HttpClient,
    path: String,
}

impl AllocationsService<'_> {
    /// Lists one page of the node's allocations.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(
        &self,
        options: Option<PaginationOptions>,
    ) -> Result<Page<Allocation>, HttpError> {
        rest::list(self.http, &self.path, options).await
    }

    /// Lists every allocation of the node, walking all pages.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`] from any page.
    pub async fn list_all(&self) -> Result<Vec<Allocation>, HttpError> {
        rest::list_all(self.http, &self.path, DEFAULT_PER_PAGE).await
    }

    /// Adds allocations to the node. The panel answers `204 No Content`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create(&self, options: &AllocationCreateOptions) -> Result<(), HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, self.path.as_str())
            .json(options)?
            .build()?;
        rest::send(self.http, request).await
    }

    /// Removes an unassigned allocation.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, allocation_id: u64) -> Result<(), HttpError> {
        rest::delete(self.http, &self.path, allocation_id).await
    }
}
