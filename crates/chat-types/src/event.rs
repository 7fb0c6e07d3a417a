use crate::auth::SignupResult;
use crate::config::RelayConfig;
use crate::error::{AuthError, ConfigError, RelayError};
use crate::session::{Session, TurnTicket};

/// Results of background work (config fetch, provider calls, webhook calls).
/// Spawned futures emit these; the app drains and applies them each frame.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    ConfigLoaded(RelayConfig),

    ConfigFailed(ConfigError),

    LoginSucceeded(Session),

    LoginFailed(AuthError),

    SignupSucceeded(SignupResult),

    SignupFailed(AuthError),

    /// Webhook produced assistant text for the turn started under `ticket`
    ReplyReceived { ticket: TurnTicket, text: String },

    /// Webhook call failed; the user message stays in the transcript
    RelayFailed { ticket: TurnTicket, error: RelayError },
}
