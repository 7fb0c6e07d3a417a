//! Startup configuration loader.

use gloo_net::http::Request;

use chat_types::{ConfigError, config::RelayConfig};

/// Default location of the configuration document, relative to the page.
pub const CONFIG_PATH: &str = "relay.json";

/// Fetch and validate the configuration served at `url`.
pub async fn fetch_config(url: &str) -> Result<RelayConfig, ConfigError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    if !response.ok() {
        return Err(ConfigError::Load(format!(
            "HTTP {} fetching {}",
            response.status(),
            url
        )));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let config = RelayConfig::from_json(&text)?;
    log::info!(
        "Configuration loaded: {} agent(s), identity at {}",
        config.agents.len(),
        config.identity.url
    );
    Ok(config)
}
