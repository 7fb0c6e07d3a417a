//! Supabase GoTrue identity adapter.
//!
//! Talks to the provider's REST API directly with browser `fetch()` via
//! gloo-net; the anon key goes in both `apikey` and `Authorization`.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde_json::Value;

use chat_core::ports::IdentityPort;
use chat_types::{
    AuthError,
    auth::{AuthGrant, Credentials, SignupResult},
    config::IdentityConfig,
};

pub struct GoTrueIdentity {
    base_url: String,
    anon_key: String,
}

impl GoTrueIdentity {
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        }
    }

    pub fn sign_in_url(&self) -> String {
        format!("{}/auth/v1/token?grant_type=password", self.base_url)
    }

    pub fn sign_up_url(&self) -> String {
        format!("{}/auth/v1/signup", self.base_url)
    }

    async fn post(&self, url: &str, credentials: &Credentials) -> Result<Response, AuthError> {
        let response = Request::post(url)
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
            .json(credentials)
            .map_err(|e| AuthError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let status_text = response.status_text();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    log::warn!("Could not read identity error body ({}): {}", status, e);
                    String::new()
                }
            };
            return Err(AuthError::from_provider(status, &status_text, &body));
        }

        Ok(response)
    }
}

#[async_trait(?Send)]
impl IdentityPort for GoTrueIdentity {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthGrant, AuthError> {
        let response = self.post(&self.sign_in_url(), credentials).await?;
        response
            .json::<AuthGrant>()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<SignupResult, AuthError> {
        let response = self.post(&self.sign_up_url(), credentials).await?;
        let body: Value = response
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;
        SignupResult::from_body(&body)
    }
}
