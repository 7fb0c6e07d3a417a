#[cfg(test)]
mod tests {
    use crate::auth::*;
    use crate::config::*;
    use crate::error::*;
    use crate::message::*;
    use crate::session::*;
    use crate::webhook::*;
    use serde_json::json;

    fn grant(email: &str) -> AuthGrant {
        serde_json::from_value(json!({
            "access_token": "tok-123",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "ref-456",
            "user": { "id": "user-1", "email": email }
        }))
        .unwrap()
    }

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_constructors() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");

        let msg = Message::assistant("Hi there");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "Hi there");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_value(Message::assistant("x")).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(serde_json::to_value(Role::User).unwrap(), "user");
    }

    // ─── Auth Payload Tests ──────────────────────────────────

    #[test]
    fn test_auth_grant_deserialize() {
        let g = grant("a@b.c");
        assert_eq!(g.access_token, "tok-123");
        assert_eq!(g.user.id, "user-1");
        assert_eq!(g.user.email.as_deref(), Some("a@b.c"));
        assert_eq!(g.expires_in, Some(3600));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::new("a@b.c", "hunter2");
        assert!(!format!("{:?}", creds).contains("hunter2"));

        let g = grant("a@b.c");
        assert!(!format!("{:?}", g).contains("tok-123"));

        let session = Session::new(&g, "Support");
        assert!(!format!("{:?}", session).contains("tok-123"));
    }

    #[test]
    fn test_credentials_serialize() {
        let json = serde_json::to_value(Credentials::new("a@b.c", "pw")).unwrap();
        assert_eq!(json, json!({ "email": "a@b.c", "password": "pw" }));
    }

    #[test]
    fn test_signup_result_pending_confirmation() {
        let body = json!({ "id": "u-9", "email": "new@b.c", "confirmation_sent_at": "2026-01-01T00:00:00Z" });
        let result = SignupResult::from_body(&body).unwrap();
        assert_eq!(result.user_id.as_deref(), Some("u-9"));
        assert_eq!(result.email.as_deref(), Some("new@b.c"));
        assert!(result.confirmation_required);
    }

    #[test]
    fn test_signup_result_autoconfirmed() {
        let body = json!({
            "access_token": "tok",
            "user": { "id": "u-9", "email": "new@b.c" }
        });
        let result = SignupResult::from_body(&body).unwrap();
        assert_eq!(result.user_id.as_deref(), Some("u-9"));
        assert!(!result.confirmation_required);
    }

    #[test]
    fn test_signup_result_rejects_non_object() {
        let err = SignupResult::from_body(&json!("nope")).unwrap_err();
        assert!(matches!(err, AuthError::InvalidResponse(_)));
    }

    #[test]
    fn test_provider_error_message_keys() {
        assert_eq!(
            provider_error_message(r#"{"code":400,"msg":"Invalid login credentials"}"#).as_deref(),
            Some("Invalid login credentials")
        );
        assert_eq!(
            provider_error_message(r#"{"error":"invalid_grant","error_description":"Email not confirmed"}"#)
                .as_deref(),
            Some("Email not confirmed")
        );
        assert_eq!(
            provider_error_message(r#"{"message":"Invalid API key"}"#).as_deref(),
            Some("Invalid API key")
        );
        assert_eq!(provider_error_message("gateway down").as_deref(), Some("gateway down"));
        assert_eq!(provider_error_message("   "), None);
    }

    #[test]
    fn test_auth_error_from_provider_falls_back_to_status() {
        let err = AuthError::from_provider(502, "Bad Gateway", "");
        assert_eq!(
            err,
            AuthError::Rejected { status: 502, message: "Bad Gateway".to_string() }
        );

        let err = AuthError::from_provider(500, "", "");
        assert_eq!(err.to_string(), "HTTP 500");
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_session_new() {
        let session = Session::new(&grant("a@b.c"), "Support");
        assert_eq!(session.auth_token(), "tok-123");
        assert_eq!(session.user_email(), "a@b.c");
        assert_eq!(session.user_id(), "user-1");
        assert_eq!(session.current_agent(), "Support");
        assert!(session.messages().is_empty());
        assert!(!session.started_at().is_empty());
    }

    #[test]
    fn test_session_ids_are_fresh() {
        let g = grant("a@b.c");
        let a = Session::new(&g, "Support");
        let b = Session::new(&g, "Support");
        assert_ne!(a.session_id(), b.session_id());
    }

    #[test]
    fn test_session_missing_email_is_empty() {
        let g: AuthGrant = serde_json::from_value(json!({
            "access_token": "t",
            "user": { "id": "u" }
        }))
        .unwrap();
        assert_eq!(Session::new(&g, "A").user_email(), "");
    }

    #[test]
    fn test_select_agent_clears_transcript() {
        let mut session = Session::new(&grant("a@b.c"), "Support");
        for i in 0..5 {
            session.push(Message::user(format!("m{}", i)));
        }

        assert!(session.select_agent("Sales"));
        assert_eq!(session.current_agent(), "Sales");
        assert!(session.messages().is_empty());
    }

    #[test]
    fn test_select_same_agent_keeps_transcript() {
        let mut session = Session::new(&grant("a@b.c"), "Support");
        session.push(Message::user("keep me"));
        assert!(!session.select_agent("Support"));
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_ticket_invalidated_by_clear_and_switch() {
        let mut session = Session::new(&grant("a@b.c"), "Support");
        let ticket = session.ticket();
        assert!(session.accepts(&ticket));

        session.clear_messages();
        assert!(!session.accepts(&ticket));

        let ticket = session.ticket();
        session.select_agent("Sales");
        assert!(!session.accepts(&ticket));

        let other = Session::new(&grant("a@b.c"), "Sales");
        assert!(!other.accepts(&session.ticket()));
    }

    // ─── Webhook Tests ───────────────────────────────────────

    #[test]
    fn test_payload_wire_names() {
        let session = Session::new(&grant("a@b.c"), "Support");
        let payload = WebhookPayload {
            chat_input: "hi".to_string(),
            session_id: session.session_id(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["chatInput"], "hi");
        assert_eq!(json["sessionId"], session.session_id().to_string());
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_reply_output_field() {
        let reply = WebhookReply { status: 200, body: r#"{"output":"hello"}"#.to_string() };
        assert_eq!(reply.into_output().unwrap(), "hello");
    }

    #[test]
    fn test_reply_missing_output_uses_placeholder() {
        let reply = WebhookReply { status: 200, body: r#"{"result":"x"}"#.to_string() };
        assert_eq!(reply.into_output().unwrap(), NO_OUTPUT_PLACEHOLDER);

        let reply = WebhookReply { status: 200, body: r#"{"output":null}"#.to_string() };
        assert_eq!(reply.into_output().unwrap(), NO_OUTPUT_PLACEHOLDER);
    }

    #[test]
    fn test_reply_non_string_output() {
        let reply = WebhookReply { status: 200, body: r#"{"output":{"a":1}}"#.to_string() };
        assert_eq!(reply.into_output().unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn test_reply_non_200_is_error() {
        let reply = WebhookReply { status: 404, body: "Not Found".to_string() };
        let err = reply.into_output().unwrap_err();
        assert_eq!(err, RelayError::Status { status: 404, body: "Not Found".to_string() });
        assert_eq!(err.to_string(), "404 - Not Found");

        // Only 200 is success
        let reply = WebhookReply { status: 201, body: r#"{"output":"x"}"#.to_string() };
        assert!(matches!(reply.into_output(), Err(RelayError::Status { status: 201, .. })));
    }

    #[test]
    fn test_reply_invalid_json() {
        let reply = WebhookReply { status: 200, body: "<html>".to_string() };
        assert!(matches!(reply.into_output(), Err(RelayError::InvalidResponse(_))));
    }

    // ─── Config Tests ────────────────────────────────────────

    const CONFIG: &str = r#"{
        "identity": { "url": "https://xyz.supabase.co/", "anon_key": "anon" },
        "agents": [
            { "name": "AI Assistant", "webhook_url": "https://hooks.example/a" },
            { "name": "Researcher", "webhook_url": "https://hooks.example/r" }
        ]
    }"#;

    #[test]
    fn test_config_from_json() {
        let config = RelayConfig::from_json(CONFIG).unwrap();
        assert_eq!(config.identity.url, "https://xyz.supabase.co");
        assert_eq!(config.agents.len(), 2);
        assert_eq!(config.agents[0], AgentEndpoint::new("AI Assistant", "https://hooks.example/a"));
    }

    #[test]
    fn test_config_parse_error() {
        let err = RelayConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_validation() {
        let mut config = RelayConfig::from_json(CONFIG).unwrap();

        config.agents.push(AgentEndpoint::new("Researcher", "https://hooks.example/other"));
        assert_eq!(config.validate(), Err(ConfigError::DuplicateAgent("Researcher".to_string())));

        config.agents.pop();
        config.agents.push(AgentEndpoint::new(" ", "https://hooks.example/x"));
        assert_eq!(config.validate(), Err(ConfigError::BlankAgentName));

        config.agents.pop();
        config.agents.push(AgentEndpoint::new("Empty", ""));
        assert_eq!(config.validate(), Err(ConfigError::BlankWebhookUrl("Empty".to_string())));

        config.agents.clear();
        assert_eq!(config.validate(), Err(ConfigError::NoAgents));
    }

    #[test]
    fn test_config_requires_identity() {
        let mut config = RelayConfig::from_json(CONFIG).unwrap();
        config.identity.anon_key.clear();
        assert_eq!(config.validate(), Err(ConfigError::MissingIdentity("anon_key")));
        assert!(!format!("{:?}", RelayConfig::from_json(CONFIG).unwrap()).contains("anon\""));
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = AuthError::Rejected { status: 400, message: "Invalid login credentials".to_string() };
        assert_eq!(err.to_string(), "Invalid login credentials");

        let err = RelayError::UnknownAgent("Ghost".to_string());
        assert_eq!(err.to_string(), "Unknown agent: Ghost");

        let err: ChatError = ConfigError::NoAgents.into();
        assert_eq!(err.to_string(), "Configuration error: No agents configured");
    }
}
