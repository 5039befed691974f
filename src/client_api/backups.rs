use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::models::{Backup, BackupCreateOptions, BackupDownload};
use crate::rest::{self, encode_segment, Page, PaginationOptions};

/// Backups of one server, addressed by UUID.
#[derive(Clone, Debug)]
pub struct BackupsService<'a> {
    http: &'a HttpClient,
    path: String,
}

impl<'a> BackupsService<'a> {
    pub(crate) const fn new(http: &'a HttpClient, path: String) -> Self {
        Self { http, path }
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(&self, options: Option<PaginationOptions>) -> Result<Page<Backup>, HttpError> {
        rest::list(self.http, &self.path, options).await
    }

    /// Starts a backup. The returned record is not yet completed.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create(&self, options: &BackupCreateOptions) -> Result<Backup, HttpError> {
        rest::create(self.http, &self.path, options).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn details(&self, uuid: &str) -> Result<Backup, HttpError> {
        rest::get(self.http, &self.path, encode_segment(uuid)).await
    }

    /// Returns a one-time download URL for the archive.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn download(&self, uuid: &str) -> Result<BackupDownload, HttpError> {
        let path = format!("{}/{}/download", self.path, encode_segment(uuid));
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        rest::fetch(self.http, request).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, uuid: &str) -> Result<(), HttpError> {
        rest::delete(self.http, &self.path, encode_segment(uuid)).await
    }
}
