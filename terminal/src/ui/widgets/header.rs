//! # Header Widget
//!
//! Top bar: collection title, page tabs and the wallet button.

use crate::app::{App, AppState, Page};
use crate::ui::theme::Theme;
use egui::RichText;

pub fn render_header(ui: &mut egui::Ui, state: &AppState, app: &App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.label(RichText::new("NFT NEIGHBORS").strong().size(18.0).color(theme.accent));
        ui.separator();

        for page in Page::all() {
            if ui.selectable_label(state.page == *page, page.title()).clicked() {
                app.handle_page_change(*page);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match state.account {
                Some(account) => {
                    if ui
                        .button("Reconnect")
                        .on_hover_text("Ask the wallet for its account again")
                        .clicked()
                    {
                        app.handle_reconnect_click();
                    }
                    ui.label(
                        RichText::new(shared::format_address(&account.to_string(), 6, 4))
                            .monospace()
                            .color(theme.success),
                    )
                    .on_hover_text(account.to_string());
                }
                None if state.connecting => {
                    ui.spinner();
                    ui.label(RichText::new("Connecting...").color(theme.secondary));
                }
                None => {
                    ui.label(RichText::new("Not connected").color(theme.secondary));
                }
            }
        });
    });
}
