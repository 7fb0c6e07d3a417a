//! Session state — the one mutable record behind the UI.
//!
//! Either nobody is logged in (`session` is `None`) or there is exactly one
//! [`Session`]. Logout drops it wholesale, so token, session id and
//! transcript are always reset together.

use chat_types::{
    RelayError,
    event::ChatEvent,
    session::Session,
};

use crate::registry::AgentRegistry;
use crate::relay::{self, PendingTurn};

#[derive(Debug, Default)]
pub struct SessionState {
    session: Option<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self { session: None }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Replace whatever was there with a freshly signed-in session.
    pub fn login(&mut self, session: Session) {
        self.session = Some(session);
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!("Signed out {}", session.user_email());
        }
    }

    /// Clear the transcript, keep the login.
    pub fn clear_chat(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.clear_messages();
        }
    }

    /// Returns whether the agent changed (and the transcript was cleared).
    pub fn select_agent(&mut self, agent: &str) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                let changed = session.select_agent(agent);
                if changed {
                    log::info!("Switched to agent {}", agent);
                }
                changed
            }
            None => false,
        }
    }

    /// Start a turn against the currently selected agent.
    pub fn begin_turn(
        &mut self,
        registry: &AgentRegistry,
        message: &str,
    ) -> Result<PendingTurn, RelayError> {
        let session = self
            .session
            .as_mut()
            .ok_or(RelayError::NotAuthenticated)?;
        let webhook_url = registry.require(session.current_agent())?;
        relay::begin_turn(session, message, webhook_url)
    }

    /// Fold the result of background work into the state.
    pub fn apply(&mut self, event: &ChatEvent) {
        match event {
            ChatEvent::LoginSucceeded(session) => self.login(session.clone()),
            ChatEvent::ReplyReceived { ticket, text } => {
                if let Some(session) = self.session.as_mut() {
                    relay::complete_turn(session, ticket, text);
                }
            }
            _ => {}
        }
    }
}
