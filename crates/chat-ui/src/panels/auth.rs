//! Login / sign-up forms shown while nobody is signed in.

use egui::{self, RichText, Vec2};
use chat_types::auth::Credentials;
use crate::state::{Activity, AuthForm, AuthTab, UiState};
use crate::theme::*;

/// What the user asked for on the auth screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    Login(Credentials),
    SignUp(Credentials),
}

/// Render the auth panel. Returns an action when a form is submitted.
pub fn auth_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<AuthAction> {
    let mut action = None;
    let busy = state.is_busy();

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.set_max_width(FORM_WIDTH);

            ui.horizontal(|ui| {
                ui.selectable_value(&mut state.auth_tab, AuthTab::Login, "Login");
                ui.selectable_value(&mut state.auth_tab, AuthTab::SignUp, "Sign Up");
            });
            ui.separator();

            match state.auth_tab {
                AuthTab::Login => {
                    if credential_form(ui, &mut state.login_form, "login", "Login", busy) {
                        action = Some(AuthAction::Login(credentials(&state.login_form)));
                    }
                    if state.activity == Activity::SigningIn {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(RichText::new("Signing in...").color(TEXT_SECONDARY).small());
                        });
                    }
                }
                AuthTab::SignUp => {
                    if credential_form(ui, &mut state.signup_form, "signup", "Sign Up", busy) {
                        action = Some(AuthAction::SignUp(credentials(&state.signup_form)));
                    }
                    if state.activity == Activity::SigningUp {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(RichText::new("Creating account...").color(TEXT_SECONDARY).small());
                        });
                    }
                }
            }

            if let Some(notice) = &state.notice {
                ui.add_space(8.0);
                super::notice_label(ui, notice);
            }
        });

    action
}

/// E-mail + password fields and a submit button. True when submitted.
fn credential_form(
    ui: &mut egui::Ui,
    form: &mut AuthForm,
    id: &str,
    button: &str,
    busy: bool,
) -> bool {
    ui.label(RichText::new("Email").color(TEXT_SECONDARY).small());
    ui.add(
        egui::TextEdit::singleline(&mut form.email)
            .id_salt((id, "email"))
            .desired_width(f32::INFINITY),
    );

    ui.add_space(4.0);

    ui.label(RichText::new("Password").color(TEXT_SECONDARY).small());
    let password = ui.add(
        egui::TextEdit::singleline(&mut form.password)
            .id_salt((id, "password"))
            .password(true)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(8.0);

    let clicked = ui
        .add_enabled(
            !busy,
            egui::Button::new(RichText::new(button).color(TEXT_PRIMARY).strong())
                .fill(ACCENT)
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(120.0, 28.0)),
        )
        .clicked();

    let entered = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    !busy && (clicked || entered)
}

fn credentials(form: &AuthForm) -> Credentials {
    Credentials::new(form.email.clone(), form.password.clone())
}
