use crate::color_history::ColorHistory;
use crate::error::EditorResult;
use crate::fill::FloodFillEngine;
use crate::grid::{BACKGROUND, CellCoord, GridSnapshot, PixelGrid};
use crate::history::HistoryStack;
use egui::Color32;
use serde::{Deserialize, Serialize};

/// The active drawing tool.
///
/// A single explicit mode dispatched by one stable intent path — the
/// predecessor of this editor swapped the canvas click handler to switch
/// tools and flipped a separate eraser flag, which this enum replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolMode {
    Paint,
    Erase,
    Fill,
}

impl ToolMode {
    pub fn name(&self) -> &'static str {
        match self {
            ToolMode::Paint => "Paint",
            ToolMode::Erase => "Erase",
            ToolMode::Fill => "Fill",
        }
    }
}

/// One discrete user action routed to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditIntent {
    /// Paint one cell with the current color.
    Paint(CellCoord),
    /// Reset one cell to the background color.
    Erase(CellCoord),
    /// Flood-fill the 4-connected region around a cell with the current color.
    Fill(CellCoord),
    Undo,
    Redo,
    SelectColor(Color32),
    SelectTool(ToolMode),
}

/// Coordinates the pixel buffer, the undo history and the flood-fill engine
/// for one editing session.
///
/// All state is mutated by the single UI intent stream; every intent runs to
/// completion before the next is accepted, so there is no internal
/// concurrency or partially applied edit.
pub struct EditSession {
    grid: PixelGrid,
    history: HistoryStack,
    fill_engine: FloodFillEngine,
    current_color: Color32,
    tool: ToolMode,
    color_history: ColorHistory,
}

impl EditSession {
    /// Starts a session over a fresh background-colored grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: PixelGrid::new(width, height),
            history: HistoryStack::new(),
            fill_engine: FloodFillEngine::new(),
            current_color: Color32::BLACK,
            tool: ToolMode::Paint,
            color_history: ColorHistory::new(),
        }
    }

    /// Applies one user intent.
    ///
    /// Grid-mutating intents record a history snapshot *before* touching the
    /// grid; recording after mutation would capture the post-edit state and
    /// make undo a no-op. Undo and redo are not themselves undoable and
    /// record nothing.
    pub fn apply(&mut self, intent: EditIntent) -> EditorResult<()> {
        match intent {
            EditIntent::Paint(coord) => {
                self.history.record_before_edit(&self.grid);
                self.grid.fill_rect(coord, self.current_color)
            }
            EditIntent::Erase(coord) => {
                self.history.record_before_edit(&self.grid);
                self.grid.fill_rect(coord, BACKGROUND)
            }
            EditIntent::Fill(coord) => {
                self.history.record_before_edit(&self.grid);
                self.fill_engine
                    .fill(&mut self.grid, coord, self.current_color)
                    .map(|_| ())
            }
            EditIntent::Undo => {
                if !self.history.undo(&mut self.grid) {
                    log::debug!("undo requested with empty history");
                }
                Ok(())
            }
            EditIntent::Redo => {
                if !self.history.redo(&mut self.grid) {
                    log::debug!("redo requested with empty redo history");
                }
                Ok(())
            }
            EditIntent::SelectColor(color) => {
                self.current_color = color;
                self.color_history.push(color);
                Ok(())
            }
            EditIntent::SelectTool(tool) => {
                if tool != self.tool {
                    log::info!("tool changed to {}", tool.name());
                }
                self.tool = tool;
                Ok(())
            }
        }
    }

    /// Builds the grid-mutating intent a pointer action at `cell` means under
    /// the active tool.
    pub fn pointer_intent(&self, cell: CellCoord) -> EditIntent {
        match self.tool {
            ToolMode::Paint => EditIntent::Paint(cell),
            ToolMode::Erase => EditIntent::Erase(cell),
            ToolMode::Fill => EditIntent::Fill(cell),
        }
    }

    /// Read-only view of the grid for rendering.
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// An independent copy of the current frame for collaborators that must
    /// not hold a borrow of the session.
    pub fn render_frame(&self) -> GridSnapshot {
        self.grid.snapshot()
    }

    pub fn current_color(&self) -> Color32 {
        self.current_color
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    /// The shortcut-row colors, oldest first.
    pub fn color_history(&self) -> &[Color32] {
        self.color_history.colors()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(crate::grid::GRID_SIZE, crate::grid::GRID_SIZE)
    }
}
