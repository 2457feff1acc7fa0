#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color_history;
pub mod error;
pub mod export;
pub mod fill;
pub mod grid;
pub mod history;
pub mod input;
pub mod session;

pub use app::PaintApp;
pub use color_history::ColorHistory;
pub use error::{EditorError, EditorResult};
pub use fill::FloodFillEngine;
pub use grid::{BACKGROUND, CANVAS_SIZE, CellCoord, GRID_SIZE, GridSnapshot, PIXEL_SIZE, PixelGrid};
pub use history::HistoryStack;
pub use input::PointerInput;
pub use session::{EditIntent, EditSession, ToolMode};
