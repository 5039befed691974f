//! Generic operations shared by every resource service.
//!
//! Each function composes [`HttpClient::build_request`] and
//! [`HttpClient::execute`] for one envelope shape. Resource services are thin
//! call sites of these with a fixed path.

use std::borrow::Cow;
use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::rest::envelope::{Envelope, PaginatedEnvelope};
use crate::rest::pagination::{PaginationOptions, DEFAULT_PER_PAGE};
use crate::rest::response::Page;

/// Percent-encodes a caller-supplied value for use as a single path segment.
///
/// ```rust
/// use pterodactyl_api::rest::encode_segment;
///
/// assert_eq!(encode_segment("abc-123"), "abc-123");
/// assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
/// ```
#[must_use]
pub fn encode_segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Fetches one page of a list endpoint.
///
/// Items come back in server order. The pagination counters are always
/// present on success.
///
/// # Errors
///
/// Returns [`HttpError`] if the request fails or the body is not a list
/// envelope of `T`.
pub async fn list<T: DeserializeOwned>(
    client: &HttpClient,
    path: &str,
    options: Option<PaginationOptions>,
) -> Result<Page<T>, HttpError> {
    let request = HttpRequest::builder(HttpMethod::Get, path)
        .maybe_pagination(options)
        .build()?;

    let envelope: PaginatedEnvelope<T> = client.request_json(request).await?;
    let (items, meta) = envelope.into_parts();
    Ok(Page::new(items, meta.pagination))
}

/// Walks a list endpoint page by page and returns every item.
///
/// Starts at page 1 and stops once the reported current page reaches the
/// reported page count. Pages are fetched one after another and appended in
/// order. A `per_page` of zero uses [`DEFAULT_PER_PAGE`].
///
/// There is no cap on the number of pages. Dropping the returned future
/// stops the walk before the next page is requested.
///
/// # Errors
///
/// Returns the first error from any page. Items from earlier pages are
/// discarded.
pub async fn list_all<T: DeserializeOwned>(
    client: &HttpClient,
    path: &str,
    per_page: u32,
) -> Result<Vec<T>, HttpError> {
    let per_page = if per_page == 0 {
        DEFAULT_PER_PAGE
    } else {
        per_page
    };

    let mut all = Vec::new();
    let mut page = 1;

    loop {
        let options = PaginationOptions::new().page(page).per_page(per_page);
        let (items, pagination) = list::<T>(client, path, Some(options)).await?.into_parts();
        all.extend(items);

        tracing::debug!(
            path,
            page = pagination.current_page,
            total_pages = pagination.total_pages,
            items = all.len(),
            "Fetched list page"
        );

        if pagination.is_last_page() {
            return Ok(all);
        }
        page += 1;
    }
}

/// Fetches `{path}/{id}` and unwraps its single-item envelope.
///
/// # Errors
///
/// Returns [`HttpError`] if the request fails or the body is not an
/// envelope of `T`.
pub async fn get<T: DeserializeOwned>(
    client: &HttpClient,
    path: &str,
    id: impl Display,
) -> Result<T, HttpError> {
    let request = HttpRequest::builder(HttpMethod::Get, format!("{path}/{id}")).build()?;
    fetch(client, request).await
}

/// Deletes `{path}/{id}`. The response body is not decoded.
///
/// # Errors
///
/// Returns [`HttpError`] if the request fails; a missing resource is an
/// [`HttpError::Api`] with status 404.
pub async fn delete(client: &HttpClient, path: &str, id: impl Display) -> Result<(), HttpError> {
    let request = HttpRequest::builder(HttpMethod::Delete, format!("{path}/{id}")).build()?;
    send(client, request).await
}

/// POSTs `body` as JSON to `path` and unwraps the single-item envelope.
///
/// # Errors
///
/// Returns [`HttpError`] if the body cannot be serialized, the request
/// fails, or the response is not an envelope of `T`.
pub async fn create<T, B>(client: &HttpClient, path: &str, body: &B) -> Result<T, HttpError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let request = HttpRequest::builder(HttpMethod::Post, path)
        .json(body)?
        .build()?;
    fetch(client, request).await
}

/// PATCHes `body` as JSON to `{path}/{id}` and unwraps the single-item
/// envelope.
///
/// # Errors
///
/// Returns [`HttpError`] if the body cannot be serialized, the request
/// fails, or the response is not an envelope of `T`.
pub async fn update<T, B>(
    client: &HttpClient,
    path: &str,
    id: impl Display,
    body: &B,
) -> Result<T, HttpError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let request = HttpRequest::builder(HttpMethod::Patch, format!("{path}/{id}"))
        .json(body)?
        .build()?;
    fetch(client, request).await
}

/// Sends `request` and unwraps a single-item envelope of `T`.
///
/// # Errors
///
/// Returns [`HttpError`] if the request fails or the body is not an
/// envelope of `T`.
pub async fn fetch<T: DeserializeOwned>(
    client: &HttpClient,
    request: HttpRequest,
) -> Result<T, HttpError> {
    let envelope: Envelope<T> = client.request_json(request).await?;
    Ok(envelope.attributes)
}

/// Sends `request` without decoding the response body.
///
/// # Errors
///
/// Returns [`HttpError`] if the request fails or the status is not 2xx.
pub async fn send(client: &HttpClient, request: HttpRequest) -> Result<(), HttpError> {
    client.request(request).await.map(|_| ())
}
