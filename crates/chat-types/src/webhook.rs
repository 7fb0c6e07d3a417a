//! Agent webhook wire format.

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::RelayError;

/// Assistant text used when a 200 reply carries no `output`.
pub const NO_OUTPUT_PLACEHOLDER: &str = "Sorry, I couldn't generate a response.";

/// Body POSTed to an agent webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    #[serde(rename = "chatInput")]
    pub chat_input: String,
    #[serde(rename = "sessionId")]
    pub session_id: Uuid,
}

/// Raw webhook answer, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookReply {
    pub status: u16,
    pub body: String,
}

impl WebhookReply {
    /// Turn a raw reply into assistant text.
    ///
    /// Only 200 counts as success. A missing or `null` `output` falls back
    /// to [`NO_OUTPUT_PLACEHOLDER`]; a non-string `output` is shown as JSON.
    pub fn into_output(self) -> Result<String, RelayError> {
        if self.status != 200 {
            return Err(RelayError::Status {
                status: self.status,
                body: self.body,
            });
        }

        let value: Value = serde_json::from_str(&self.body)
            .map_err(|e| RelayError::InvalidResponse(e.to_string()))?;

        let text = match value.get("output") {
            None | Some(Value::Null) => NO_OUTPUT_PLACEHOLDER.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        Ok(text)
    }
}
