pub mod auth;
pub mod chat;
pub mod sidebar;

use egui::RichText;
use crate::state::{Notice, NoticeKind};
use crate::theme::*;

/// Inline success / error box shared by the panels
pub(crate) fn notice_label(ui: &mut egui::Ui, notice: &Notice) {
    let (fg, bg) = match notice.kind {
        NoticeKind::Success => (SUCCESS, BG_SUCCESS),
        NoticeKind::Error => (ERROR, BG_ERROR),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(&notice.text).color(fg));
        });
}
