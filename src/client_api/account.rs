use serde::Deserialize;

use crate::client_api::DataWrapper;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::models::{
    Account, AccountApiKey, ApiKeyCreateOptions, TwoFactorDetails, TwoFactorDisableOptions,
    TwoFactorEnableOptions, UpdateEmailOptions, UpdatePasswordOptions,
};
use crate::rest::{self, encode_segment, Page, PaginationOptions};

const PATH: &str = "api/client/account";
const API_KEYS_PATH: &str = "api/client/account/api-keys";

/// The account that owns the configured key.
#[derive(Clone, Copy, Debug)]
pub struct AccountService<'a> {
    http: &'a HttpClient,
}

impl<'a> AccountService<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn details(&self) -> Result<Account, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, PATH).build()?;
        rest::fetch(self.http, request).await
    }

    /// Starts two-factor enrollment and returns the TOTP setup data.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn two_factor_details(&self) -> Result<TwoFactorDetails, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, format!("{PATH}/two-factor")).build()?;
        let wrapper: DataWrapper<TwoFactorDetails> = self.http.request_json(request).await?;
        Ok(wrapper.data)
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails; a wrong code is an
    /// [`HttpError::Api`] with status 400.
    pub async fn enable_two_factor(&self, options: &TwoFactorEnableOptions) -> Result<(), HttpError> {
        self.send(HttpMethod::Post, "two-factor", options).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn disable_two_factor(
        &self,
        options: &TwoFactorDisableOptions,
    ) -> Result<(), HttpError> {
        self.send(HttpMethod::Delete, "two-factor", options).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_email(&self, options: &UpdateEmailOptions) -> Result<(), HttpError> {
        self.send(HttpMethod::Put, "email", options).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_password(&self, options: &UpdatePasswordOptions) -> Result<(), HttpError> {
        self.send(HttpMethod::Put, "password", options).await
    }

    #[must_use]
    pub const fn api_keys(&self) -> ApiKeysService<'a> {
        ApiKeysService { http: self.http }
    }

    async fn send<B: serde::Serialize>(
        &self,
        method: HttpMethod,
        route: &str,
        body: &B,
    ) -> Result<(), HttpError> {
        let request = HttpRequest::builder(method, format!("{PATH}/{route}"))
            .json(body)?
            .build()?;
        rest::send(self.http, request).await
    }
}

#[derive(Deserialize)]
struct CreatedApiKey {
    attributes: AccountApiKey,
    #[serde(default)]
    meta: CreatedApiKeyMeta,
}

#[derive(Default, Deserialize)]
struct CreatedApiKeyMeta {
    secret_token: Option<String>,
}

/// Client API keys of the account.
#[derive(Clone, Copy, Debug)]
pub struct ApiKeysService<'a> {
    http: &'a HttpClient,
}

impl ApiKeysService<'_> {
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(
        &self,
        options: Option<PaginationOptions>,
    ) -> Result<Page<AccountApiKey>, HttpError> {
        rest::list(self.http, API_KEYS_PATH, options).await
    }

    /// Creates a key. The returned value carries the secret in
    /// [`AccountApiKey::token`]; the panel never shows it again.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create(&self, options: &ApiKeyCreateOptions) -> Result<AccountApiKey, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, API_KEYS_PATH)
            .json(options)?
            .build()?;
        let created: CreatedApiKey = self.http.request_json(request).await?;

        let mut key = created.attributes;
        if created.meta.secret_token.is_some() {
            key.token = created.meta.secret_token;
        }
        Ok(key)
    }

    /// Revokes a key by its public identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, identifier: &str) -> Result<(), HttpError> {
        rest::delete(self.http, API_KEYS_PATH, encode_segment(identifier)).await
    }
}
