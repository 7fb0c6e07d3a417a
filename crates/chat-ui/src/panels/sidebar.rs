//! Sidebar — who is signed in, and the logout button.

use egui::{self, RichText, Vec2};
use chat_types::session::Session;
use crate::theme::*;

/// Render the sidebar. Returns true when Logout was clicked.
pub fn sidebar_panel(ui: &mut egui::Ui, session: &Session) -> bool {
    let mut logout = false;

    egui::Frame::default()
        .fill(BG_SUCCESS)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("Logged in as {}", session.user_email()))
                    .color(SUCCESS),
            )
            .on_hover_text(format!("User id {}", session.user_id()));
        });

    ui.add_space(4.0);
    ui.label(
        RichText::new(format!("Session started {}", short_timestamp(session.started_at())))
            .color(TEXT_SECONDARY)
            .small(),
    );

    ui.add_space(8.0);

    if ui
        .add(
            egui::Button::new(RichText::new("Logout").color(TEXT_PRIMARY))
                .fill(BG_SURFACE)
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(100.0, 26.0)),
        )
        .clicked()
    {
        logout = true;
    }

    logout
}

/// `2026-10-16T09:30:12.345+00:00` → `2026-10-16 09:30`
pub fn short_timestamp(rfc3339: &str) -> String {
    match (rfc3339.get(..10), rfc3339.get(11..16)) {
        (Some(date), Some(time)) => format!("{} {}", date, time),
        _ => rfc3339.to_string(),
    }
}
