//! # GUI Rendering Framework
//!
//! Renders a cloned state snapshot every frame, so no lock is held while widgets
//! are laid out.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, Page};
use crate::ui::widgets::notifications::NotificationManager;

/// Main render function - called every frame by eframe
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager) {
    for notice in app.take_notifications() {
        notifications.notify(notice);
    }

    let state = match app.state.try_read() {
        Some(guard) => guard.clone(),
        // Lock is held by another task, skip this frame
        None => return,
    };

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(4.0);
        widgets::header::render_header(ui, &state, app);
        ui.add_space(4.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        if ctx.input(|i| i.key_pressed(egui::Key::Tab)) {
            app.next_page();
        }

        ui.add_space(24.0);
        ui.vertical_centered(|ui| match state.page {
            Page::Allowlist => screens::allowlist::render(ui, &state, app),
            Page::Mint => screens::mint::render(ui, &state, app),
        });
    });

    notifications.show(ctx);
}
