use client::OriginApi;
use dioxus::prelude::*;
use shared_types::ApiConfig;
use std::rc::Rc;

mod nav;
mod routes;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

/// Origin API client shared by every page. `None` when the configured base
/// URL is unusable; pages treat that like a failed request.
#[derive(Clone)]
pub struct ApiContext(pub Option<Rc<OriginApi>>);

fn main() {
    dioxus::launch(App);
}

/// Where the API lives. In the browser the UI is served by the origin
/// itself, so the page origin is the API origin.
#[cfg(feature = "web")]
fn api_config() -> ApiConfig {
    let mut config = ApiConfig::default();
    match gloo::utils::window().location().origin() {
        Ok(origin) => config.base_url = origin,
        Err(e) => tracing::warn!(error = ?e, "Cannot read page origin, using default API URL"),
    }
    config
}

#[cfg(all(feature = "desktop", not(feature = "web")))]
fn api_config() -> ApiConfig {
    client::config::load_config(std::path::Path::new(client::config::CONFIG_PATH)).api
}

#[cfg(not(any(feature = "web", feature = "desktop")))]
fn api_config() -> ApiConfig {
    ApiConfig::default()
}

fn build_api() -> ApiContext {
    let config = api_config();
    match OriginApi::from_config(&config) {
        Ok(api) => {
            tracing::info!(base_url = %api.base_url(), "Origin API client ready");
            ApiContext(Some(Rc::new(api)))
        }
        Err(e) => {
            tracing::error!(error = %e, "Origin API client unavailable");
            ApiContext(None)
        }
    }
}

#[component]
fn App() -> Element {
    use_context_provider(build_api);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
