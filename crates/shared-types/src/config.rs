use serde::{Deserialize, Serialize};

/// Origin web UI port used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://localhost:8444";

/// Connection settings for the origin web UI API.
///
/// Every field has a default so that a missing or partial `[api]` table
/// still yields a usable client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "ApiConfig::default_base_url")]
    pub base_url: String,
    /// Request timeout for native clients; `0` disables it. The browser
    /// applies its own.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_secs: None,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}
