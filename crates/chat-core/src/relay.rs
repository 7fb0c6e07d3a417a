//! Chat relay — one webhook round trip per user message.
//!
//! A turn runs in three steps so the UI never holds the session across an
//! await point:
//! 1. [`begin_turn`] validates the input, appends the user message and
//!    captures everything the request needs
//! 2. [`dispatch`] performs the single POST and interprets the reply
//! 3. [`complete_turn`] appends the assistant text, if the transcript the
//!    turn was started against is still live
//!
//! [`send`] chains the three for callers that own the session outright.

use chat_types::{
    RelayError,
    message::Message,
    session::{Session, TurnTicket},
    webhook::WebhookPayload,
};

use crate::ports::WebhookPort;

/// A turn whose user message is already in the transcript.
#[derive(Debug, Clone)]
pub struct PendingTurn {
    pub ticket: TurnTicket,
    pub webhook_url: String,
    pub bearer_token: String,
    pub payload: WebhookPayload,
}

pub fn begin_turn(
    session: &mut Session,
    message: &str,
    webhook_url: &str,
) -> Result<PendingTurn, RelayError> {
    if message.trim().is_empty() {
        return Err(RelayError::EmptyMessage);
    }

    session.push(Message::user(message));

    Ok(PendingTurn {
        ticket: session.ticket(),
        webhook_url: webhook_url.to_string(),
        bearer_token: session.auth_token().to_string(),
        payload: WebhookPayload {
            chat_input: message.to_string(),
            session_id: session.session_id(),
        },
    })
}

/// Exactly one POST; no timeout of our own and no retry.
pub async fn dispatch(webhook: &dyn WebhookPort, turn: &PendingTurn) -> Result<String, RelayError> {
    let reply = webhook
        .post(&turn.webhook_url, &turn.bearer_token, &turn.payload)
        .await
        .inspect_err(|e| log::warn!("Webhook {} unreachable: {}", turn.webhook_url, e))?;

    let status = reply.status;
    reply.into_output().inspect_err(|e| {
        log::warn!("Webhook {} answered {}: {}", turn.webhook_url, status, e);
    })
}

/// Append the assistant reply. Returns `false` (and appends nothing) when
/// the session has since been cleared, switched to another agent, or
/// replaced by a new login.
pub fn complete_turn(session: &mut Session, ticket: &TurnTicket, text: &str) -> bool {
    if !session.accepts(ticket) {
        log::debug!("Dropping reply for stale turn {:?}", ticket);
        return false;
    }
    session.push(Message::assistant(text));
    true
}

/// Full turn against a session the caller owns for the whole round trip.
pub async fn send(
    session: &mut Session,
    webhook: &dyn WebhookPort,
    message: &str,
    webhook_url: &str,
) -> Result<String, RelayError> {
    let turn = begin_turn(session, message, webhook_url)?;
    let text = dispatch(webhook, &turn).await?;
    complete_turn(session, &turn.ticket, &text);
    Ok(text)
}
