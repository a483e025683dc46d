use shared_types::AppConfig;
use std::path::Path;

/// Path to the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding `[api] base_url`.
pub const BASE_URL_ENV: &str = "ORIGIN_UI_BASE_URL";

/// Parse `config.toml` contents. Malformed input falls back to defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Read the config file at `path`, then apply environment overrides
/// (including any `.env` file). A missing file yields defaults.
pub fn load_config(path: &Path) -> AppConfig {
    let _ = dotenvy::dotenv();

    let mut config = match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Config file not read, using defaults");
            AppConfig::default()
        }
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    tracing::debug!(?config, "Loaded configuration");
    config
}

/// Apply overrides looked up through `lookup`; empty values are ignored.
pub fn apply_env_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
        config.api.base_url = url;
    }
}
