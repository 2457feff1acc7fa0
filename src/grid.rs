use crate::error::{EditorError, EditorResult};
use egui::Color32;

/// Side length of the drawing area in device pixels.
pub const CANVAS_SIZE: usize = 512;
/// Side length of one grid cell in device pixels. This is also the brush
/// size: the paint tool always covers exactly one cell.
pub const PIXEL_SIZE: usize = 16;
/// Number of cells per grid side.
pub const GRID_SIZE: usize = CANVAS_SIZE / PIXEL_SIZE;

/// The color an untouched cell renders as.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// A cell position on the grid: `(col, row)`, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub col: usize,
    pub row: usize,
}

impl CellCoord {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// An immutable, independent copy of the full grid contents at one instant.
///
/// Snapshots are copy-on-capture: once a snapshot is pushed onto a history
/// stack it is owned by that stack and shares no storage with the live grid,
/// so later edits cannot corrupt it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    width: usize,
    height: usize,
    cells: Vec<Color32>,
}

impl GridSnapshot {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

/// The authoritative grid of cell colors — the single source of truth for
/// what is rendered. Every cell has a defined color at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    cells: Vec<Color32>,
}

impl PixelGrid {
    /// Creates a grid of the given dimensions with every cell set to the
    /// background color.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BACKGROUND; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `coord` lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.col < self.width && coord.row < self.height
    }

    fn index(&self, coord: CellCoord) -> EditorResult<usize> {
        if self.contains(coord) {
            Ok(coord.row * self.width + coord.col)
        } else {
            Err(EditorError::OutOfBounds {
                col: coord.col,
                row: coord.row,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Returns the current color of a cell.
    pub fn get(&self, coord: CellCoord) -> EditorResult<Color32> {
        Ok(self.cells[self.index(coord)?])
    }

    /// Overwrites one cell's color.
    pub fn set(&mut self, coord: CellCoord, color: Color32) -> EditorResult<()> {
        let idx = self.index(coord)?;
        self.cells[idx] = color;
        Ok(())
    }

    /// Paints the single grid-aligned cell under `coord`.
    ///
    /// The brush size equals the cell size by construction, so there is no
    /// partial-cell painting and this is exactly a one-cell `set`.
    pub fn fill_rect(&mut self, coord: CellCoord, color: Color32) -> EditorResult<()> {
        self.set(coord, color)
    }

    /// Returns a deep, independent copy of the full grid contents.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
        }
    }

    /// Replaces the entire grid contents with the snapshot's contents.
    ///
    /// Dimensions are fixed for the session's lifetime, so a mismatched
    /// snapshot is a programming error.
    pub fn restore(&mut self, snapshot: &GridSnapshot) {
        debug_assert_eq!(
            (self.width, self.height),
            (snapshot.width, snapshot.height),
            "snapshot dimensions must match the live grid"
        );
        self.cells.copy_from_slice(&snapshot.cells);
    }

    /// Iterates all cells in row-major order together with their coordinates.
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellCoord, Color32)> + '_ {
        self.cells.iter().enumerate().map(|(i, &color)| {
            (
                CellCoord::new(i % self.width, i / self.width),
                color,
            )
        })
    }
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::new(GRID_SIZE, GRID_SIZE)
    }
}
