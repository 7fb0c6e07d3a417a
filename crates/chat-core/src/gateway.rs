//! Identity gateway — sign-in / sign-up call-throughs.
//!
//! No local validation and no retries: whatever the provider says is
//! returned to the caller as-is.

use chat_types::{
    AuthError,
    auth::{Credentials, SignupResult},
    session::Session,
};

use crate::ports::IdentityPort;

/// Sign in and open a fresh session on `agent`.
pub async fn login(
    identity: &dyn IdentityPort,
    email: &str,
    password: &str,
    agent: &str,
) -> Result<Session, AuthError> {
    let credentials = Credentials::new(email, password);
    match identity.sign_in(&credentials).await {
        Ok(grant) => {
            let session = Session::new(&grant, agent);
            log::info!("Signed in as {} (session {})", session.user_email(), session.session_id());
            Ok(session)
        }
        Err(e) => {
            log::warn!("Sign-in failed: {}", e);
            Err(e)
        }
    }
}

/// Create an account. The caller still has to [`login`] afterwards.
pub async fn signup(
    identity: &dyn IdentityPort,
    email: &str,
    password: &str,
) -> Result<SignupResult, AuthError> {
    let credentials = Credentials::new(email, password);
    let result = identity.sign_up(&credentials).await;
    match &result {
        Ok(r) if r.confirmation_required => log::info!("Sign-up accepted, confirmation pending"),
        Ok(_) => log::info!("Sign-up accepted"),
        Err(e) => log::warn!("Sign-up failed: {}", e),
    }
    result
}
