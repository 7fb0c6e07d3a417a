//! Main egui application — composes the panels and runs the round trips.
//!
//! Every frame: drain the EventBus, fold events into the session and the UI
//! state, then render. User actions either change the session directly
//! (logout, clear, agent switch) or spawn exactly one future whose result
//! comes back through the bus.

use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use chat_core::event_bus::EventBus;
use chat_core::gateway;
use chat_core::ports::{IdentityPort, WebhookPort};
use chat_core::registry::AgentRegistry;
use chat_core::relay;
use chat_core::session_state::SessionState;
use chat_platform::config::CONFIG_PATH;
use chat_platform::{FetchWebhook, GoTrueIdentity, fetch_config};
use chat_types::auth::Credentials;
use chat_types::config::RelayConfig;
use chat_types::event::ChatEvent;
use chat_ui::panels::auth::{self, AuthAction};
use chat_ui::panels::chat::{self, ChatAction};
use chat_ui::panels::sidebar;
use chat_ui::state::{Activity, UiState};
use chat_ui::theme;

/// Built once the configuration has arrived
struct Services {
    registry: AgentRegistry,
    identity: Rc<dyn IdentityPort>,
}

pub struct ChatApp {
    ui_state: UiState,
    session: SessionState,
    event_bus: EventBus,
    services: Option<Services>,
    webhook: Rc<dyn WebhookPort>,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let event_bus = EventBus::new();
        Self::load_config(event_bus.clone(), cc.egui_ctx.clone());

        Self {
            ui_state: UiState::new(),
            session: SessionState::new(),
            event_bus,
            services: None,
            webhook: Rc::new(FetchWebhook::new()),
            first_frame: true,
        }
    }

    /// Fetch `relay.json` (async)
    fn load_config(event_bus: EventBus, ctx: egui::Context) {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_config(CONFIG_PATH).await {
                Ok(config) => event_bus.emit(ChatEvent::ConfigLoaded(config)),
                Err(e) => {
                    log::error!("{}", e);
                    event_bus.emit(ChatEvent::ConfigFailed(e));
                }
            }
            ctx.request_repaint();
        });
    }

    fn install_config(&mut self, config: &RelayConfig) {
        match AgentRegistry::new(config.agents.clone()) {
            Ok(registry) => {
                self.services = Some(Services {
                    registry,
                    identity: Rc::new(GoTrueIdentity::new(&config.identity)),
                });
            }
            Err(e) => {
                log::error!("{}", e);
                self.ui_state.config_error = Some(e.to_string());
            }
        }
    }

    /// Apply everything the spawned futures produced since the last frame.
    fn drain_events(&mut self, ctx: &egui::Context) {
        let events = self.event_bus.drain();
        if events.is_empty() {
            return;
        }

        for event in &events {
            if let ChatEvent::ConfigLoaded(config) = event {
                self.install_config(config);
            }
            self.session.apply(event);
        }
        self.ui_state.process_events(events);
        ctx.request_repaint();
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        self.drain_events(ctx);

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading(
                RichText::new("Welcome back!")
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.add_space(4.0);
        });

        let Some(services) = &self.services else {
            CentralPanel::default().show(ctx, |ui| match &self.ui_state.config_error {
                Some(error) => {
                    ui.label(RichText::new(error).color(theme::ERROR));
                }
                None => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(RichText::new("Loading configuration...").color(theme::TEXT_SECONDARY));
                    });
                }
            });
            return;
        };

        // ── Unauthenticated ──────────────────────────────────
        let Some(session) = self.session.session() else {
            let mut action = None;
            CentralPanel::default().show(ctx, |ui| {
                action = auth::auth_panel(ui, &mut self.ui_state);
            });
            if let Some(action) = action {
                self.dispatch_auth(action, ctx);
            }
            return;
        };

        // ── Authenticated ────────────────────────────────────
        let mut logout = false;
        SidePanel::left("sidebar")
            .min_width(200.0)
            .max_width(260.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                logout = sidebar::sidebar_panel(ui, session);
            });

        let agents: Vec<&str> = services.registry.names().collect();
        let mut action = None;
        CentralPanel::default().show(ctx, |ui| {
            action = chat::chat_panel(ui, &mut self.ui_state, session, &agents);
        });

        if logout {
            self.session.logout();
            self.ui_state.reset_for_logout();
        } else if let Some(action) = action {
            self.handle_chat_action(action, ctx);
        }
    }
}

impl ChatApp {
    /// Start a sign-in or sign-up round trip (async)
    fn dispatch_auth(&mut self, action: AuthAction, ctx: &egui::Context) {
        let Some(services) = &self.services else {
            return;
        };
        let identity = services.identity.clone();
        let default_agent = services.registry.default_agent().to_string();
        let event_bus = self.event_bus.clone();
        let ctx = ctx.clone();

        match action {
            AuthAction::Login(Credentials { email, password }) => {
                self.ui_state.begin(Activity::SigningIn);
                wasm_bindgen_futures::spawn_local(async move {
                    let event = match gateway::login(identity.as_ref(), &email, &password, &default_agent).await {
                        Ok(session) => ChatEvent::LoginSucceeded(session),
                        Err(e) => ChatEvent::LoginFailed(e),
                    };
                    event_bus.emit(event);
                    ctx.request_repaint();
                });
            }
            AuthAction::SignUp(Credentials { email, password }) => {
                self.ui_state.begin(Activity::SigningUp);
                wasm_bindgen_futures::spawn_local(async move {
                    let event = match gateway::signup(identity.as_ref(), &email, &password).await {
                        Ok(result) => ChatEvent::SignupSucceeded(result),
                        Err(e) => ChatEvent::SignupFailed(e),
                    };
                    event_bus.emit(event);
                    ctx.request_repaint();
                });
            }
        }
    }

    fn handle_chat_action(&mut self, action: ChatAction, ctx: &egui::Context) {
        match action {
            ChatAction::SelectAgent(name) => {
                if self.session.select_agent(&name) {
                    self.ui_state.transcript_reset();
                }
            }
            ChatAction::ClearChat => {
                self.session.clear_chat();
                self.ui_state.transcript_reset();
            }
            ChatAction::Send(text) => self.dispatch_message(text, ctx),
        }
    }

    /// Append the user message now, relay it to the agent webhook (async)
    fn dispatch_message(&mut self, text: String, ctx: &egui::Context) {
        let Some(services) = &self.services else {
            return;
        };

        let turn = match self.session.begin_turn(&services.registry, &text) {
            Ok(turn) => turn,
            Err(e) => {
                log::warn!("Message not sent: {}", e);
                self.ui_state.show_error(format!("Error: {}", e));
                return;
            }
        };

        self.ui_state.begin(Activity::Relaying(turn.ticket.clone()));

        let webhook = self.webhook.clone();
        let event_bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let event = match relay::dispatch(webhook.as_ref(), &turn).await {
                Ok(text) => ChatEvent::ReplyReceived { ticket: turn.ticket, text },
                Err(error) => ChatEvent::RelayFailed { ticket: turn.ticket, error },
            };
            event_bus.emit(event);
            ctx.request_repaint();
        });
    }
}
