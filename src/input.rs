use crate::grid::CellCoord;
use crate::session::{EditIntent, EditSession, ToolMode};
use egui::{Context, Key, Pos2, Rect};

/// Translates raw egui input over the canvas into editor intents.
///
/// This is the only place screen coordinates are resolved into grid cells;
/// everything behind it works purely in cell space.
pub struct PointerInput {
    canvas_rect: Rect,
    cell_size: f32,
    /// Cell the pointer last produced an intent for during the current drag.
    last_cell: Option<CellCoord>,
}

impl PointerInput {
    pub fn new(canvas_rect: Rect, cell_size: f32) -> Self {
        Self {
            canvas_rect,
            cell_size,
            last_cell: None,
        }
    }

    /// Update the canvas rectangle (the panel may move between frames).
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Resolves a screen position into the grid cell under it, or `None`
    /// outside the canvas.
    pub fn cell_at(&self, pos: Pos2, grid_width: usize, grid_height: usize) -> Option<CellCoord> {
        if !self.canvas_rect.contains(pos) {
            return None;
        }
        let col = ((pos.x - self.canvas_rect.min.x) / self.cell_size) as usize;
        let row = ((pos.y - self.canvas_rect.min.y) / self.cell_size) as usize;
        // A position on the bottom/right edge can round to one past the last
        // cell; treat it as outside.
        if col >= grid_width || row >= grid_height {
            return None;
        }
        Some(CellCoord::new(col, row))
    }

    /// Processes this frame's input and returns the intents it implies.
    pub fn process_input(&mut self, ctx: &Context, session: &EditSession) -> Vec<EditIntent> {
        let mut intents = Vec::new();

        ctx.input(|input| {
            if input.modifiers.command && input.key_pressed(Key::Z) {
                intents.push(if input.modifiers.shift {
                    EditIntent::Redo
                } else {
                    EditIntent::Undo
                });
            }
            if input.modifiers.command && input.key_pressed(Key::Y) {
                intents.push(EditIntent::Redo);
            }

            let grid = session.grid();
            let pressed = input.pointer.primary_pressed();
            let down = input.pointer.primary_down();

            if !down {
                self.last_cell = None;
                return;
            }

            let Some(pos) = input.pointer.interact_pos() else {
                return;
            };
            let Some(cell) = self.cell_at(pos, grid.width(), grid.height()) else {
                return;
            };

            if pressed {
                intents.push(session.pointer_intent(cell));
                self.last_cell = Some(cell);
            } else if session.tool() != ToolMode::Fill && self.last_cell != Some(cell) {
                // Dragging paints each newly entered cell once; fill only
                // fires on the initial press.
                intents.push(session.pointer_intent(cell));
                self.last_cell = Some(cell);
            }
        });

        intents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn positions_resolve_to_cells() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), vec2(64.0, 64.0));
        let input = PointerInput::new(rect, 16.0);

        assert_eq!(
            input.cell_at(Pos2::new(10.0, 20.0), 4, 4),
            Some(CellCoord::new(0, 0))
        );
        assert_eq!(
            input.cell_at(Pos2::new(10.0 + 17.0, 20.0 + 33.0), 4, 4),
            Some(CellCoord::new(1, 2))
        );
        assert_eq!(input.cell_at(Pos2::new(9.0, 20.0), 4, 4), None);
    }
}
