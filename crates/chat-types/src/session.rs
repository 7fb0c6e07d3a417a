use std::fmt;

use uuid::Uuid;

use crate::auth::AuthGrant;
use crate::message::Message;

/// The authenticated, single-user chat context.
///
/// Only exists while somebody is logged in. The transcript is append-only;
/// the only way to shrink it is [`Session::clear_messages`], which also moves
/// the transcript to a new epoch so replies addressed to the old one can be
/// recognised and dropped.
#[derive(Clone)]
pub struct Session {
    auth_token: String,
    user_id: String,
    user_email: String,
    session_id: Uuid,
    current_agent: String,
    messages: Vec<Message>,
    epoch: u64,
    started_at: String,
}

impl Session {
    /// Fresh session for a successful sign-in. Each call draws a new id.
    pub fn new(grant: &AuthGrant, agent: impl Into<String>) -> Self {
        Self {
            auth_token: grant.access_token.clone(),
            user_id: grant.user.id.clone(),
            user_email: grant.user.email.clone().unwrap_or_default(),
            session_id: Uuid::new_v4(),
            current_agent: agent.into(),
            messages: Vec::new(),
            epoch: 0,
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn current_agent(&self) -> &str {
        &self.current_agent
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn started_at(&self) -> &str {
        &self.started_at
    }

    /// Address of the transcript as it is right now.
    pub fn ticket(&self) -> TurnTicket {
        TurnTicket {
            session_id: self.session_id,
            agent: self.current_agent.clone(),
            epoch: self.epoch,
        }
    }

    /// Whether a reply sent under `ticket` still belongs in this transcript.
    pub fn accepts(&self, ticket: &TurnTicket) -> bool {
        ticket.session_id == self.session_id
            && ticket.agent == self.current_agent
            && ticket.epoch == self.epoch
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
        self.epoch += 1;
    }

    /// Switch agents. The transcript is cleared whenever the agent actually
    /// changes; returns whether it did.
    pub fn select_agent(&mut self, agent: &str) -> bool {
        if self.current_agent == agent {
            return false;
        }
        self.current_agent = agent.to_string();
        self.clear_messages();
        true
    }
}

/// Identifies the transcript a chat turn was started against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnTicket {
    pub session_id: Uuid,
    pub agent: String,
    pub epoch: u64,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("auth_token", &"<redacted>")
            .field("user_email", &self.user_email)
            .field("session_id", &self.session_id)
            .field("current_agent", &self.current_agent)
            .field("messages", &self.messages.len())
            .field("epoch", &self.epoch)
            .finish()
    }
}
