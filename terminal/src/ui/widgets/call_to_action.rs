//! # Call To Action Widget
//!
//! Renders the one control chosen by the view reducer and routes its click.

use crate::app::{App, CallToAction};
use crate::ui::theme::Theme;
use egui::{Button, RichText};

pub fn render_call_to_action(ui: &mut egui::Ui, cta: CallToAction, app: &App) {
    let theme = Theme::default();

    if !cta.is_actionable() {
        render_notice(ui, cta, &theme);
        return;
    }

    if ui.add(button(cta, &theme)).clicked() {
        match cta.intent() {
            Some(intent) => {
                app.handle_write_click(intent);
            }
            None => {
                app.handle_connect_click();
            }
        }
    }
}

fn render_notice(ui: &mut egui::Ui, cta: CallToAction, theme: &Theme) {
    match cta {
        CallToAction::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new(cta.label()).color(theme.secondary));
            });
        }
        CallToAction::AlreadyJoinedNotice => {
            ui.label(RichText::new(cta.label()).size(16.0).color(theme.success));
        }
        _ => {
            ui.label(RichText::new(cta.label()).size(16.0).color(theme.warning));
        }
    }
}

fn button(cta: CallToAction, theme: &Theme) -> Button<'static> {
    Button::new(RichText::new(cta.label()).size(16.0).strong())
        .fill(theme.accent_dark)
        .min_size(egui::vec2(200.0, 40.0))
}
