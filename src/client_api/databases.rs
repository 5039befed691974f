use serde::Deserialize;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::models::{ClientDatabase, ClientDatabaseCreateOptions};
use crate::rest::{self, encode_segment, Page, PaginationOptions};

/// A database document as returned by create and rotate-password.
///
/// The new password sits in a `password` relationship, which the panel
/// nests inside `attributes`; some panels place it next to `attributes`.
#[derive(Deserialize)]
struct DatabaseDocument {
    attributes: DatabaseAttributes,
    #[serde(default)]
    relationships: Option<PasswordRelationship>,
}

#[derive(Deserialize)]
struct DatabaseAttributes {
    #[serde(default)]
    relationships: Option<PasswordRelationship>,
    #[serde(flatten)]
    database: ClientDatabase,
}

#[derive(Deserialize)]
struct PasswordRelationship {
    password: Option<PasswordObject>,
}

#[derive(Deserialize)]
struct PasswordObject {
    attributes: Option<PasswordAttributes>,
}

#[derive(Deserialize)]
struct PasswordAttributes {
    password: Option<String>,
}

impl PasswordRelationship {
    fn into_password(self) -> Option<String> {
        self.password?.attributes?.password
    }
}

impl DatabaseDocument {
    fn into_database(self) -> ClientDatabase {
        let DatabaseAttributes {
            relationships,
            mut database,
        } = self.attributes;

        let password = relationships
            .or(self.relationships)
            .and_then(PasswordRelationship::into_password);
        if password.is_some() {
            database.password = password;
        }
        database
    }
}

/// Databases of one server.
#[derive(Clone, Debug)]
pub struct DatabasesService<'a> {
    http: &'a HttpClient,
    path: String,
}

impl<'a> DatabasesService<'a> {
    pub(crate) const fn new(http: &'a HttpClient, path: String) -> Self {
        Self { http, path }
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(
        &self,
        options: Option<PaginationOptions>,
    ) -> Result<Page<ClientDatabase>, HttpError> {
        rest::list(self.http, &self.path, options).await
    }

    /// Creates a database. The result carries the generated password.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create(
        &self,
        options: &ClientDatabaseCreateOptions,
    ) -> Result<ClientDatabase, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, self.path.as_str())
            .json(options)?
            .build()?;
        let document: DatabaseDocument = self.http.request_json(request).await?;
        Ok(document.into_database())
    }

    /// Generates a new password. The result carries it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn rotate_password(&self, database_id: &str) -> Result<ClientDatabase, HttpError> {
        let path = format!("{}/{}/rotate-password", self.path, encode_segment(database_id));
        let request = HttpRequest::builder(HttpMethod::Post, path).build()?;
        let document: DatabaseDocument = self.http.request_json(request).await?;
        Ok(document.into_database())
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, database_id: &str) -> Result<(), HttpError> {
        rest::delete(self.http, &self.path, encode_segment(database_id)).await
    }
}
