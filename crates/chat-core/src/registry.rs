//! Agent registry — static name → webhook URL table.

use chat_types::{
    ConfigError, RelayError,
    config::{AgentEndpoint, validate_agents},
};

/// Agents available to chat with, in configuration order.
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    agents: Vec<AgentEndpoint>,
}

impl AgentRegistry {
    pub fn new(agents: Vec<AgentEndpoint>) -> Result<Self, ConfigError> {
        validate_agents(&agents)?;
        Ok(Self { agents })
    }

    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.agents
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.webhook_url.as_str())
    }

    /// Like [`resolve`](Self::resolve), but an unknown name is a relay error.
    pub fn require(&self, name: &str) -> Result<&str, RelayError> {
        self.resolve(name)
            .ok_or_else(|| RelayError::UnknownAgent(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.agents.iter().map(|a| a.name.as_str())
    }

    /// First configured agent; selected right after login.
    pub fn default_agent(&self) -> &str {
        &self.agents[0].name
    }
}
