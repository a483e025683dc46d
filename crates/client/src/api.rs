use async_trait::async_trait;
use reqwest::{header, Client};
use secrecy::{ExposeSecret, SecretString};
use shared_types::{ApiConfig, AppError, ResetLoginRequest, StatusMessage};
use url::Url;

/// Fixed endpoint that replaces the web UI admin password.
pub const RESET_LOGIN_PATH: &str = "/api/v1.0/origin-ui/resetLogin";

/// Name of the session cookie issued by the origin's login endpoint.
pub const LOGIN_COOKIE: &str = "login";

/// The single outbound call the password form makes.
///
/// `?Send` so the browser client, whose futures are not `Send`, qualifies.
#[async_trait(?Send)]
pub trait ResetLogin {
    async fn reset_login(&self, request: &ResetLoginRequest) -> Result<StatusMessage, AppError>;
}

/// HTTP client for the origin web UI API.
///
/// In the browser the session cookie rides along automatically. Terminal
/// callers attach it explicitly with [`OriginApi::with_login_cookie`].
pub struct OriginApi {
    base_url: Url,
    http: Client,
    login_cookie: Option<SecretString>,
}

impl OriginApi {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            http: Client::new(),
            login_cookie: None,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, AppError> {
        Ok(Self {
            base_url: parse_base_url(&config.base_url)?,
            http: build_http_client(config)?,
            login_cookie: None,
        })
    }

    pub fn with_login_cookie(mut self, cookie: SecretString) -> Self {
        self.login_cookie = Some(cookie);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of the reset endpoint. The path is rooted at the host,
    /// so any path on the base URL is replaced.
    pub fn reset_login_url(&self) -> Result<Url, AppError> {
        self.base_url
            .join(RESET_LOGIN_PATH)
            .map_err(|e| AppError::internal(format!("cannot build reset URL: {e}")))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    Url::parse(raw).map_err(|e| AppError::internal(format!("invalid API base URL {raw:?}: {e}")))
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &ApiConfig) -> Result<Client, AppError> {
    let mut builder = Client::builder();
    // Zero means no timeout, same as leaving it unset.
    if let Some(secs) = config.timeout_secs.filter(|secs| *secs > 0) {
        builder = builder.timeout(std::time::Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| AppError::internal(format!("cannot build HTTP client: {e}")))
}

#[cfg(target_arch = "wasm32")]
fn build_http_client(_config: &ApiConfig) -> Result<Client, AppError> {
    Ok(Client::new())
}

#[async_trait(?Send)]
impl ResetLogin for OriginApi {
    #[tracing::instrument(skip(self, request), fields(endpoint = RESET_LOGIN_PATH))]
    async fn reset_login(&self, request: &ResetLoginRequest) -> Result<StatusMessage, AppError> {
        let url = self.reset_login_url()?;

        let mut builder = self
            .http
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(request);
        if let Some(cookie) = &self.login_cookie {
            builder = builder.header(
                header::COOKIE,
                format!("{LOGIN_COOKIE}={}", cookie.expose_secret()),
            );
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(AppError::from_response(status.as_u16(), &body));
        }

        tracing::info!(status = status.as_u16(), "Password reset accepted");
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}
