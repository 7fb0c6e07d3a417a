use thiserror::Error;

/// Failure of a sign-in or sign-up call against the identity provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The provider answered and refused the request.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never got an answer.
    #[error("Network error: {0}")]
    Transport(String),

    /// The provider answered with something we could not decode.
    #[error("Unexpected provider response: {0}")]
    InvalidResponse(String),
}

/// Failure of a chat turn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Message is empty")]
    EmptyMessage,

    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    /// Webhook answered with anything other than 200.
    #[error("{status} - {body}")]
    Status { status: u16, body: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected webhook response: {0}")]
    InvalidResponse(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Could not load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {0}")]
    Parse(String),

    #[error("Identity provider {0} is not set")]
    MissingIdentity(&'static str),

    #[error("No agents configured")]
    NoAgents,

    #[error("Agent name must not be empty")]
    BlankAgentName,

    #[error("Agent '{0}' has no webhook URL")]
    BlankWebhookUrl(String),

    #[error("Agent '{0}' is configured more than once")]
    DuplicateAgent(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Relay error: {0}")]
    Relay(#[from] RelayError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
