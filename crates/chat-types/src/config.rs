use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Startup configuration, served next to the app as `relay.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    pub identity: IdentityConfig,
    pub agents: Vec<AgentEndpoint>,
}

/// Hosted identity provider connection parameters
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub url: String,
    pub anon_key: String,
}

impl std::fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentEndpoint {
    pub name: String,
    pub webhook_url: String,
}

impl AgentEndpoint {
    pub fn new(name: impl Into<String>, webhook_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            webhook_url: webhook_url.into(),
        }
    }
}

impl RelayConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let mut config: RelayConfig = serde_json::from_str(text)?;
        config.identity.url = config.identity.url.trim().trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.identity.url.trim().is_empty() {
            return Err(ConfigError::MissingIdentity("url"));
        }
        if self.identity.anon_key.trim().is_empty() {
            return Err(ConfigError::MissingIdentity("anon_key"));
        }
        validate_agents(&self.agents)
    }
}

/// Agent names must be non-blank and unique, URLs non-blank, and there must
/// be at least one agent.
pub fn validate_agents(agents: &[AgentEndpoint]) -> Result<(), ConfigError> {
    if agents.is_empty() {
        return Err(ConfigError::NoAgents);
    }

    for (i, agent) in agents.iter().enumerate() {
        if agent.name.trim().is_empty() {
            return Err(ConfigError::BlankAgentName);
        }
        if agent.webhook_url.trim().is_empty() {
            return Err(ConfigError::BlankWebhookUrl(agent.name.clone()));
        }
        if agents[..i].iter().any(|a| a.name == agent.name) {
            return Err(ConfigError::DuplicateAgent(agent.name.clone()));
        }
    }
    Ok(())
}
