//! # Mint Screen

use crate::app::{App, AppState, CallToAction};
use crate::ui::theme::Theme;
use crate::ui::widgets::call_to_action::render_call_to_action;
use egui::RichText;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &App) {
    let theme = Theme::default();

    ui.heading("Welcome to NFT Neighbors!");
    ui.label(RichText::new("Its an NFT collection for neighbors in Crypto.").color(theme.secondary));
    ui.add_space(12.0);

    if state.connected {
        let max = state
            .max_supply
            .map(|max| max.to_string())
            .unwrap_or_else(|| "?".to_string());
        ui.label(format!("{}/{} have been minted", state.minted, max));
        ui.add_space(12.0);
    }

    let cta = state.call_to_action();
    match cta {
        CallToAction::PresaleMintControl => {
            ui.label("Presale has started!!! If your address is whitelisted, Mint a NFT Neighbor 🥳");
        }
        CallToAction::PublicMintControl => {
            ui.label("Presale has ended. Public mint is open to everyone.");
        }
        _ => {}
    }
    render_call_to_action(ui, cta, app);
}
