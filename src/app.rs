use crate::export;
use crate::grid::{CANVAS_SIZE, PIXEL_SIZE};
use crate::input::PointerInput;
use crate::session::{EditIntent, EditSession, ToolMode};
use egui::{Color32, Rect, Sense, Stroke, vec2};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// The slice of session state worth keeping across restarts: the palette,
/// not the canvas. The grid itself is deliberately not persisted.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct Prefs {
    current_color: [u8; 4],
    tool: ToolMode,
    color_history: Vec<[u8; 4]>,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            current_color: Color32::BLACK.to_array(),
            tool: ToolMode::Paint,
            color_history: Vec::new(),
        }
    }
}

impl Prefs {
    fn from_session(session: &EditSession) -> Self {
        Self {
            current_color: session.current_color().to_array(),
            tool: session.tool(),
            color_history: session
                .color_history()
                .iter()
                .map(|c| c.to_array())
                .collect(),
        }
    }

    /// Replays the saved palette into a fresh session. Selections are pushed
    /// oldest-first, so the color history rebuilds in its stored order; the
    /// saved current color is re-selected last, which is a dedup no-op for
    /// the history but restores the active color.
    fn apply_to(&self, session: &mut EditSession) {
        let _ = session.apply(EditIntent::SelectTool(self.tool));
        for &rgba in &self.color_history {
            let [r, g, b, a] = rgba;
            let _ = session.apply(EditIntent::SelectColor(
                Color32::from_rgba_premultiplied(r, g, b, a),
            ));
        }
        let [r, g, b, a] = self.current_color;
        let _ = session.apply(EditIntent::SelectColor(
            Color32::from_rgba_premultiplied(r, g, b, a),
        ));
    }
}

/// The pixel-art editor application.
pub struct PaintApp {
    session: EditSession,
    input: PointerInput,
    export_message: Option<String>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut session = EditSession::default();

        if let Some(storage) = cc.storage {
            let prefs: Prefs = eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
            prefs.apply_to(&mut session);
        }

        Self {
            session,
            // The real rect is known once the canvas is laid out; until then
            // nothing is inside it.
            input: PointerInput::new(Rect::NOTHING, PIXEL_SIZE as f32),
            export_message: None,
        }
    }

    fn export_canvas(&mut self) {
        let path = export_path();
        match export::save_png(self.session.grid(), &path) {
            Ok(()) => {
                self.export_message = Some(format!("Saved {}", path.display()));
            }
            Err(err) => {
                log::error!("export failed: {err}");
                self.export_message = Some(format!("Export failed: {err}"));
            }
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui, intents: &mut Vec<EditIntent>) {
        ui.horizontal(|ui| {
            for tool in [ToolMode::Paint, ToolMode::Erase, ToolMode::Fill] {
                if ui
                    .selectable_label(self.session.tool() == tool, tool.name())
                    .clicked()
                {
                    intents.push(EditIntent::SelectTool(tool));
                }
            }

            ui.separator();

            let mut color = self.session.current_color();
            if ui.color_edit_button_srgba(&mut color).changed() {
                intents.push(EditIntent::SelectColor(color));
            }

            // Shortcut row of recently used colors.
            for &recent in self.session.color_history() {
                let swatch = egui::Button::new("").fill(recent).min_size(vec2(18.0, 18.0));
                if ui.add(swatch).clicked() {
                    intents.push(EditIntent::SelectColor(recent));
                }
            }

            ui.separator();

            if ui
                .add_enabled(self.session.can_undo(), egui::Button::new("Undo"))
                .clicked()
            {
                intents.push(EditIntent::Undo);
            }
            if ui
                .add_enabled(self.session.can_redo(), egui::Button::new("Redo"))
                .clicked()
            {
                intents.push(EditIntent::Redo);
            }

            ui.separator();

            if ui.button("Save PNG").clicked() {
                self.export_canvas();
            }
            if let Some(message) = &self.export_message {
                ui.label(message.clone());
            }
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let side = CANVAS_SIZE as f32;
        let (response, painter) = ui.allocate_painter(vec2(side, side), Sense::click_and_drag());
        let rect = response.rect;
        self.input.set_canvas_rect(rect);

        let cell = PIXEL_SIZE as f32;
        for (coord, color) in self.session.grid().iter_cells() {
            let min = rect.min + vec2(coord.col as f32 * cell, coord.row as f32 * cell);
            painter.rect_filled(Rect::from_min_size(min, vec2(cell, cell)), 0.0, color);
        }

        // Fixed-size grid overlay on top of the cells.
        let line = Stroke::new(1.0, Color32::from_gray(200));
        for i in 0..=self.session.grid().width() {
            let x = rect.min.x + i as f32 * cell;
            painter.line_segment([egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)], line);
        }
        for i in 0..=self.session.grid().height() {
            let y = rect.min.y + i as f32 * cell;
            painter.line_segment([egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)], line);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &Prefs::from_session(&self.session));
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut intents = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui, &mut intents);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas(ui);
        });

        intents.extend(self.input.process_input(ctx, &self.session));

        for intent in intents {
            if let Err(err) = self.session.apply(intent) {
                // Bounds violations are prevented by the input translation;
                // anything that slips through is worth a loud log.
                log::error!("rejected intent {intent:?}: {err}");
            }
        }
    }
}

fn export_path() -> PathBuf {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("pixel-art-{secs}.png"))
}
