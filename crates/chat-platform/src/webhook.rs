//! Agent webhook adapter over browser `fetch()`.

use async_trait::async_trait;
use gloo_net::http::Request;

use chat_core::ports::WebhookPort;
use chat_types::{
    RelayError,
    webhook::{WebhookPayload, WebhookReply},
};

#[derive(Default)]
pub struct FetchWebhook;

impl FetchWebhook {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl WebhookPort for FetchWebhook {
    async fn post(
        &self,
        url: &str,
        bearer_token: &str,
        payload: &WebhookPayload,
    ) -> Result<WebhookReply, RelayError> {
        let response = Request::post(url)
            .header("Authorization", &format!("Bearer {}", bearer_token))
            .json(payload)
            .map_err(|e| RelayError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        Ok(WebhookReply { status, body })
    }
}
