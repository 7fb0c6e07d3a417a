//! Port traits — the boundary between the core and the network.
//!
//! The core only knows these traits. `chat-platform` implements them with
//! browser `fetch()`; tests implement them with canned replies.

use async_trait::async_trait;
use chat_types::{
    AuthError, RelayError,
    auth::{AuthGrant, Credentials, SignupResult},
    webhook::{WebhookPayload, WebhookReply},
};

// ─── Identity Port ───────────────────────────────────────────

#[async_trait(?Send)]
pub trait IdentityPort {
    /// Password sign-in
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthGrant, AuthError>;

    /// Account creation. Does not sign the user in.
    async fn sign_up(&self, credentials: &Credentials) -> Result<SignupResult, AuthError>;
}

// ─── Webhook Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait WebhookPort {
    /// POST `payload` to `url` with a bearer token. Any HTTP status is a
    /// successful transport; only a failed exchange is an error.
    async fn post(
        &self,
        url: &str,
        bearer_token: &str,
        payload: &WebhookPayload,
    ) -> Result<WebhookReply, RelayError>;
}
