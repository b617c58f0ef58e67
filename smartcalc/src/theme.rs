//! Calculator theme
//!
//! Black on white, 1px outlines, square corners. Font sizes come from the
//! user's config.

use calccore::CalcConfig;
use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub struct CalcColors;

impl CalcColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

pub struct CalcTheme {
    pub font_size_body: f32,
    pub font_size_button: f32,
    pub font_size_display: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self::from_config(&CalcConfig::default())
    }
}

impl CalcTheme {
    pub fn from_config(config: &CalcConfig) -> Self {
        Self {
            font_size_body: 14.0,
            font_size_button: config.button_font_size,
            font_size_display: config.display_font_size,
            window_padding: 8.0,
            item_spacing: 5.0,
        }
    }

    /// Font for the result display
    pub fn display_font(&self) -> FontId {
        FontId::proportional(self.font_size_display)
    }

    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_body * 0.8, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_button, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_display, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();

        visuals.window_fill = CalcColors::WHITE;
        visuals.panel_fill = CalcColors::WHITE;
        visuals.faint_bg_color = CalcColors::WHITE;
        visuals.extreme_bg_color = CalcColors::WHITE;
        visuals.window_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, CalcColors::BLACK);

        let bw = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = CalcColors::WHITE;
            ws.weak_bg_fill = CalcColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, CalcColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, CalcColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        bw(&mut visuals.widgets.noninteractive);
        bw(&mut visuals.widgets.inactive);
        bw(&mut visuals.widgets.open);

        // Pressed buttons invert
        visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, CalcColors::BLACK);
        visuals.widgets.active.bg_fill = CalcColors::BLACK;
        visuals.widgets.active.weak_bg_fill = CalcColors::BLACK;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, CalcColors::WHITE);

        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}

/// Strip Cmd+/Cmd- so the zoom shortcuts cannot fire; the plain keys are
/// still calculator input.
pub fn consume_zoom_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| {
            !matches!(event,
                egui::Event::Key { key, modifiers, .. }
                    if modifiers.command
                        && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals))
        });
    });
}
