//! # GUI Theme
//!
//! Dark theme with a red accent, applied once at startup.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

/// Color palette
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color32,
    pub text: Color32,
    pub accent: Color32,
    pub accent_dark: Color32,
    pub border: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub secondary: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(0, 0, 0),
            text: Color32::from_rgb(255, 255, 255),
            accent: Color32::from_rgb(204, 0, 0),
            accent_dark: Color32::from_rgb(102, 0, 0),
            border: Color32::from_rgb(51, 51, 51),
            success: Color32::from_rgb(0, 200, 0),
            warning: Color32::from_rgb(255, 170, 0),
            secondary: Color32::from_rgb(150, 150, 150),
        }
    }
}

impl Theme {
    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.override_text_color = Some(self.text);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.window_stroke = Stroke::new(1.0, self.border);

        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(51, 0, 0);
        visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, self.accent);
        visuals.widgets.active.bg_fill = self.accent_dark;
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, self.accent);
        visuals.selection.stroke = Stroke::new(2.0, self.accent);
        visuals
    }

    /// Apply to both egui themes. `style_mut_of` avoids the `set_visuals` panic in egui 0.33.
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();
        for theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(6.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(14.0, 8.0);
            });
        }
        tracing::debug!("Applied theme visuals");
    }
}
