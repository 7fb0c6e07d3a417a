//! UI-level state that drives rendering.
//!
//! Holds only what the panels need beyond the session itself: form fields,
//! the chat input, the in-flight activity and the inline notice. Updated each
//! frame from the drained EventBus.

use chat_types::{
    auth::SignupResult,
    event::ChatEvent,
    session::TurnTicket,
};
use egui_commonmark::CommonMarkCache;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    SignUp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Inline message shown under the active form or above the chat input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// The one round trip that may be in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    Idle,
    LoadingConfig,
    SigningIn,
    SigningUp,
    Relaying(TurnTicket),
}

pub struct UiState {
    pub auth_tab: AuthTab,
    pub login_form: AuthForm,
    pub signup_form: AuthForm,
    pub input_text: String,
    pub activity: Activity,
    pub notice: Option<Notice>,
    /// Set once configuration failed to load; the app cannot continue
    pub config_error: Option<String>,
    /// Layout cache for the markdown transcript
    pub markdown: CommonMarkCache,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            auth_tab: AuthTab::Login,
            login_form: AuthForm::default(),
            signup_form: AuthForm::default(),
            input_text: String::new(),
            activity: Activity::LoadingConfig,
            notice: None,
            config_error: None,
            markdown: CommonMarkCache::default(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.activity != Activity::Idle
    }

    /// Mark a round trip as started and drop the previous notice.
    pub fn begin(&mut self, activity: Activity) {
        self.activity = activity;
        self.notice = None;
    }

    /// Show an error that did not come from background work.
    pub fn show_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::error(text));
    }

    /// The transcript was cleared or switched. A reply still in flight keeps
    /// the activity pending until its future reports back, so no second
    /// request can start meanwhile.
    pub fn transcript_reset(&mut self) {
        self.notice = None;
    }

    /// Back to the login screen with empty forms.
    pub fn reset_for_logout(&mut self) {
        let config_error = self.config_error.take();
        *self = Self::new();
        self.activity = Activity::Idle;
        self.config_error = config_error;
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::ConfigLoaded(_) => {
                    self.activity = Activity::Idle;
                }
                ChatEvent::ConfigFailed(e) => {
                    self.activity = Activity::Idle;
                    self.config_error = Some(e.to_string());
                }
                ChatEvent::LoginSucceeded(_) => {
                    self.activity = Activity::Idle;
                    self.login_form.password.clear();
                    self.input_text.clear();
                    self.notice = None;
                }
                ChatEvent::LoginFailed(e) => {
                    self.activity = Activity::Idle;
                    self.notice = Some(Notice::error(format!("Login failed: {}", e)));
                }
                ChatEvent::SignupSucceeded(result) => {
                    self.activity = Activity::Idle;
                    self.finish_signup(&result);
                }
                ChatEvent::SignupFailed(e) => {
                    self.activity = Activity::Idle;
                    self.notice = Some(Notice::error(format!("Signup failed: {}", e)));
                }
                ChatEvent::ReplyReceived { ticket, .. } => {
                    if self.activity == Activity::Relaying(ticket) {
                        self.activity = Activity::Idle;
                    }
                }
                ChatEvent::RelayFailed { ticket, error } => {
                    if self.activity == Activity::Relaying(ticket) {
                        self.activity = Activity::Idle;
                        self.notice = Some(Notice::error(format!("Error: {}", error)));
                    } else {
                        log::debug!("Ignoring failure of a superseded turn: {}", error);
                    }
                }
            }
        }
    }

    fn finish_signup(&mut self, result: &SignupResult) {
        let mut text = "Sign up successful! Please log in.".to_string();
        if result.confirmation_required {
            text.push_str(" Check your inbox to confirm your e-mail first.");
        }
        self.notice = Some(Notice::success(text));

        self.login_form.email = std::mem::take(&mut self.signup_form.email);
        self.login_form.password.clear();
        self.signup_form.password.clear();
        self.auth_tab = AuthTab::Login;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
