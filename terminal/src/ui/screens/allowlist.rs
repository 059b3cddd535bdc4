//! # Allowlist Screen
//!
//! Join-the-allowlist page: current count against capacity plus the join control.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::call_to_action::render_call_to_action;
use egui::RichText;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &App) {
    let theme = Theme::default();

    ui.heading("Welcome to NFT Neighbors!");
    ui.label(RichText::new("Its an NFT collection for neighbors in Crypto.").color(theme.secondary));
    ui.add_space(12.0);

    if state.connected {
        let joined = format!("{} have already joined the Whitelist", state.allowlist.count);
        match state.allowlist.capacity {
            Some(capacity) => ui.label(format!("{joined} ({capacity} spots in total)")),
            None => ui.label(joined),
        };
        ui.add_space(12.0);
    }

    render_call_to_action(ui, state.call_to_action(), app);
}
