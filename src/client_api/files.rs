use serde::Serialize;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::models::{
    CompressFilesOptions, CopyFileOptions, CreateFolderOptions, DecompressFileOptions,
    DeleteFilesOptions, FileObject, RenameFilesOptions, SignedUrl,
};
use crate::rest::{self, PaginatedEnvelope};

/// The file manager of one server.
///
/// Paths are relative to the server root, e.g. `"/plugins/config.yml"`.
#[derive(Clone, Debug)]
pub struct FilesService<'a> {
    http: &'a HttpClient,
    path: String,
}

impl<'a> FilesService<'a> {
    pub(crate) const fn new(http: &'a HttpClient, path: String) -> Self {
        Self { http, path }
    }

    /// Lists a directory. The listing is not paginated.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(&self, directory: &str) -> Result<Vec<FileObject>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.route("list"))
            .query_param("directory", directory)
            .build()?;
        let envelope: PaginatedEnvelope<FileObject> = self.http.request_json(request).await?;
        Ok(envelope.into_parts().0)
    }

    /// Reads a file as text.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn contents(&self, file: &str) -> Result<String, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.route("contents"))
            .query_param("file", file)
            .build()?;
        Ok(self.http.request(request).await?.text())
    }

    /// Returns a one-time download URL for a file.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn download(&self, file: &str) -> Result<SignedUrl, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.route("download"))
            .query_param("file", file)
            .build()?;
        rest::fetch(self.http, request).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn rename(&self, options: &RenameFilesOptions) -> Result<(), HttpError> {
        self.send(HttpMethod::Put, "rename", options).await
    }

    /// Duplicates a file next to itself.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn copy(&self, options: &CopyFileOptions) -> Result<(), HttpError> {
        self.send(HttpMethod::Post, "copy", options).await
    }

    /// Replaces the contents of a file, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn write(&self, file: &str, content: impl Into<String>) -> Result<(), HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, self.route("write"))
            .query_param("file", file)
            .text(content)
            .build()?;
        rest::send(self.http, request).await
    }

    /// Archives files and returns the created archive.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn compress(&self, options: &CompressFilesOptions) -> Result<FileObject, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, self.route("compress"))
            .json(options)?
            .build()?;
        rest::fetch(self.http, request).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn decompress(&self, options: &DecompressFileOptions) -> Result<(), HttpError> {
        self.send(HttpMethod::Post, "decompress", options).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, options: &DeleteFilesOptions) -> Result<(), HttpError> {
        self.send(HttpMethod::Post, "delete", options).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_folder(&self, options: &CreateFolderOptions) -> Result<(), HttpError> {
        self.send(HttpMethod::Post, "create-folder", options).await
    }

    /// Returns a one-time URL that accepts multipart uploads.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn upload_url(&self) -> Result<SignedUrl, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.route("upload")).build()?;
        rest::fetch(self.http, request).await
    }

    async fn send<B: Serialize>(
        &self,
        method: HttpMethod,
        route: &str,
        body: &B,
    ) -> Result<(), HttpError> {
        let request = HttpRequest::builder(method, self.route(route))
            .json(body)?
            .build()?;
        rest::send(self.http, request).await
    }

    fn route(&self, route: &str) -> String {
        format!("{}/{route}", self.path)
    }
}
