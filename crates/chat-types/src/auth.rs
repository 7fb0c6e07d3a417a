//! Identity provider payloads (GoTrue REST shapes).

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AuthError;

/// E-mail / password pair sent to the provider as-is.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Successful password sign-in.
#[derive(Clone, Deserialize)]
pub struct AuthGrant {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

impl fmt::Debug for AuthGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthGrant")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("user", &self.user)
            .finish()
    }
}

/// Outcome of a sign-up call. Never carries a usable session: the caller
/// has to log in afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupResult {
    pub user_id: Option<String>,
    pub email: Option<String>,
    /// The provider is waiting for the user to confirm their e-mail.
    pub confirmation_required: bool,
}

impl SignupResult {
    /// Sign-up answers either with a bare user object or, when
    /// auto-confirm is on, with a session object wrapping one.
    pub fn from_body(body: &Value) -> std::result::Result<Self, AuthError> {
        if !body.is_object() {
            return Err(AuthError::InvalidResponse(
                "sign-up response is not a JSON object".to_string(),
            ));
        }

        let has_session = body.get("access_token").is_some_and(|t| t.is_string());
        let user = if has_session {
            body.get("user").unwrap_or(&Value::Null)
        } else {
            body
        };

        Ok(Self {
            user_id: user.get("id").and_then(Value::as_str).map(String::from),
            email: user.get("email").and_then(Value::as_str).map(String::from),
            confirmation_required: !has_session,
        })
    }
}

/// Pull a human-readable message out of a provider error body.
pub fn provider_error_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["msg", "error_description", "message", "error"] {
            if let Some(text) = value.get(key).and_then(Value::as_str) {
                if !text.trim().is_empty() {
                    return Some(text.trim().to_string());
                }
            }
        }
    }

    let raw = body.trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

impl AuthError {
    /// Build a rejection from a non-success provider reply.
    pub fn from_provider(status: u16, status_text: &str, body: &str) -> Self {
        let message = provider_error_message(body).unwrap_or_else(|| {
            if status_text.is_empty() {
                format!("HTTP {}", status)
            } else {
                status_text.to_string()
            }
        });
        AuthError::Rejected { status, message }
    }
}
