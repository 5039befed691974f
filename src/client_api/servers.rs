use serde::Serialize;

use crate::client_api::{
    BackupsService, DataWrapper, DatabasesService, FilesService, NetworkService,
    SchedulesService, SettingsService, StartupService, SubusersService,
};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::models::{ClientServer, PowerSignal, ResourceUsage, WebsocketDetails};
use crate::rest;

#[derive(Serialize)]
struct CommandBody<'c> {
    command: &'c str,
}

#[derive(Serialize)]
struct PowerBody {
    signal: PowerSignal,
}

/// Operations on one server the account can access.
///
/// ```rust,no_run
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// use pterodactyl_api::{Client, KeyType};
/// use pterodactyl_api::models::PowerSignal;
///
/// let client = Client::new("https://panel.example.com", "ptlc_abc", KeyType::Client)?;
/// let server = client.client_api().servers("1a7ce997");
/// server.set_power_state(PowerSignal::Restart).await?;
/// let usage = server.resources().await?;
/// println!("{}", usage.current_state);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ServerService<'a> {
    http: &'a HttpClient,
    path: String,
}

impl<'a> ServerService<'a> {
    pub(crate) const fn new(http: &'a HttpClient, path: String) -> Self {
        Self { http, path }
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn details(&self) -> Result<ClientServer, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.path.as_str()).build()?;
        rest::fetch(self.http, request).await
    }

    /// Fetches credentials for the console websocket.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn websocket(&self) -> Result<WebsocketDetails, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.route("websocket")).build()?;
        let wrapper: DataWrapper<WebsocketDetails> = self.http.request_json(request).await?;
        Ok(wrapper.data)
    }

    /// Fetches live state and resource usage from the daemon.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn resources(&self) -> Result<ResourceUsage, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.route("resources")).build()?;
        rest::fetch(self.http, request).await
    }

    /// Sends a line to the server console.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails; an offline server is an
    /// [`HttpError::Api`] with status 502.
    pub async fn send_command(&self, command: &str) -> Result<(), HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, self.route("command"))
            .json(&CommandBody { command })?
            .build()?;
        rest::send(self.http, request).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn set_power_state(&self, signal: PowerSignal) -> Result<(), HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, self.route("power"))
            .json(&PowerBody { signal })?
            .build()?;
        rest::send(self.http, request).await
    }

    #[must_use]
    pub fn databases(&self) -> DatabasesService<'a> {
        DatabasesService::new(self.http, self.route("databases"))
    }

    #[must_use]
    pub fn files(&self) -> FilesService<'a> {
        FilesService::new(self.http, self.route("files"))
    }

    #[must_use]
    pub fn schedules(&self) -> SchedulesService<'a> {
        SchedulesService::new(self.http, self.route("schedules"))
    }

    #[must_use]
    pub fn network(&self) -> NetworkService<'a> {
        NetworkService::new(self.http, self.route("network/allocations"))
    }

    /// Subusers of the server.
    #[must_use]
    pub fn users(&self) -> SubusersService<'a> {
        SubusersService::new(self.http, self.route("users"))
    }

    #[must_use]
    pub fn backups(&self) -> BackupsService<'a> {
        BackupsService::new(self.http, self.route("backups"))
    }

    #[must_use]
    pub fn startup(&self) -> StartupService<'a> {
        StartupService::new(self.http, self.route("startup"))
    }

    #[must_use]
    pub fn settings(&self) -> SettingsService<'a> {
        SettingsService::new(self.http, self.route("settings"))
    }

    fn route(&self, route: &str) -> String {
        format!("{}/{route}", self.path)
    }
}
