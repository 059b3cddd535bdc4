//! # Notifications Widget
//!
//! Toast notifications using egui-notify for wallet alerts and transaction outcomes.

use crate::app::{Notice, NoticeLevel};
use egui_notify::Toasts;

/// Notification manager for the application
#[derive(Default)]
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    pub fn warning(&mut self, message: String) {
        self.toasts.warning(message);
    }

    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    /// Queue a notice raised by the event handler.
    pub fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => self.success(notice.message),
            NoticeLevel::Info => self.info(notice.message),
            NoticeLevel::Warning => self.warning(notice.message),
            NoticeLevel::Error => self.error(notice.message),
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
