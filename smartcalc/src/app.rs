//! Smart Calculator window

use calccore::{CalcConfig, Command, Session};
use egui::{Context, Key};

use crate::theme::{consume_zoom_keys, CalcColors, CalcTheme};

/// Button captions, row by row. Empty cells are left blank.
const BUTTON_ROWS: [[&str; 4]; 5] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
    ["C", calccore::command::BACKSPACE_LABEL, "", ""],
];

const DISPLAY_HEIGHT: f32 = 48.0;

pub struct SmartCalcApp {
    session: Session,
    theme: CalcTheme,
}

impl SmartCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &CalcConfig) -> Self {
        Self {
            session: Session::new(config.error_marker.clone()),
            theme: CalcTheme::from_config(config),
        }
    }

    fn press(&mut self, command: Command) {
        self.session.press(command);
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_zoom_keys(ctx);

        let commands: Vec<Command> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Text(text) => {
                        let mut chars = text.chars();
                        match (chars.next(), chars.next()) {
                            (Some(c), None) => Command::from_char(c),
                            _ => None,
                        }
                    }
                    egui::Event::Key { key, pressed: true, .. } => key_command(*key),
                    _ => None,
                })
                .collect()
        });

        for command in commands {
            self.press(command);
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(CalcColors::WHITE)
            .stroke(egui::Stroke::new(1.0, CalcColors::BLACK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
            .show(ui, |ui| {
                ui.set_min_height(DISPLAY_HEIGHT);
                ui.set_max_height(DISPLAY_HEIGHT);
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.session.display())
                            .font(self.theme.display_font())
                            .strong(),
                    );
                });
            });
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        let spacing = ui.spacing().item_spacing;
        let btn_w = (ui.available_width() - spacing.x * 3.0) / 4.0;
        let btn_h = ((ui.available_height() - spacing.y * 4.0) / 5.0).max(28.0);

        for row in BUTTON_ROWS {
            ui.horizontal(|ui| {
                for label in row {
                    let Some(command) = Command::from_label(label) else {
                        continue;
                    };
                    let button = egui::Button::new(egui::RichText::new(label).strong());
                    if ui.add_sized([btn_w, btn_h], button).clicked() {
                        self.press(command);
                    }
                }
            });
        }
    }
}

impl eframe::App for SmartCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(CalcColors::WHITE).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_buttons(ui);
            });
    }
}

/// Keys that never arrive as text.
fn key_command(key: Key) -> Option<Command> {
    match key {
        Key::Enter => Some(Command::Equals),
        Key::Escape => Some(Command::Clear),
        Key::Backspace => Some(Command::Backspace),
        _ => None,
    }
}
