//! Chat panel — agent selector, transcript and input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};
use chat_types::message::{Message, Role};
use chat_types::session::Session;
use crate::state::{Activity, UiState};
use crate::theme::*;

/// What the user asked for in the chat panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    SelectAgent(String),
    ClearChat,
    Send(String),
}

/// Render the chat panel for `session`. `agents` lists the selectable agent
/// names in display order.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    session: &Session,
    agents: &[&str],
) -> Option<ChatAction> {
    let mut action = None;
    let relaying = matches!(state.activity, Activity::Relaying(_));

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header: agent selector + clear, locked while a reply is pending
                ui.horizontal(|ui| {
                    let mut selected = session.current_agent().to_string();
                    ui.add_enabled_ui(!relaying, |ui| {
                        egui::ComboBox::from_id_salt("agent_select")
                            .selected_text(selected.clone())
                            .width(ui.available_width() - 110.0)
                            .show_ui(ui, |ui| {
                                for name in agents {
                                    ui.selectable_value(&mut selected, name.to_string(), *name);
                                }
                            });
                    });
                    if !relaying && selected != session.current_agent() {
                        action = Some(ChatAction::SelectAgent(selected));
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let clear = ui.add_enabled(
                            !relaying,
                            egui::Button::new(RichText::new("Clear Chat").color(TEXT_SECONDARY))
                                .fill(BG_SURFACE)
                                .corner_radius(PANEL_ROUNDING),
                        );
                        if clear.clicked() {
                            action = Some(ChatAction::ClearChat);
                        }
                    });
                });

                ui.separator();

                // Transcript
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in session.messages() {
                            render_message(ui, &mut state.markdown, message, session.current_agent());
                            ui.add_space(4.0);
                        }

                        if relaying {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(RichText::new("Processing...").color(TEXT_SECONDARY));
                            });
                        }

                        if let Some(notice) = &state.notice {
                            super::notice_label(ui, notice);
                        }
                    });

                ui.add_space(8.0);

                // Input
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text(format!("Chat with {}", session.current_agent()))
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add_enabled(!relaying, input);

                    let send_enabled = !state.input_text.trim().is_empty() && !relaying;
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if send_enabled && (entered || send_btn.clicked()) {
                        action = Some(ChatAction::Send(std::mem::take(&mut state.input_text)));
                        response.request_focus();
                    }
                });
            });
        });

    action
}

/// One transcript entry; the content is rendered as CommonMark.
fn render_message(ui: &mut egui::Ui, cache: &mut CommonMarkCache, message: &Message, agent: &str) {
    let (label, label_color, bg) = match message.role {
        Role::User => ("You", ACCENT, BG_USER),
        Role::Assistant => (agent, SUCCESS, BG_SECONDARY),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(label_color).strong().small());
            ui.visuals_mut().override_text_color = Some(TEXT_PRIMARY);
            CommonMarkViewer::new().show(ui, cache, &message.content);
        });
}
