use crate::error::EditorResult;
use crate::grid::{CellCoord, PixelGrid};
use egui::Color32;

/// 4-connected flood fill over logical grid cells.
///
/// The engine operates purely in cell-coordinate space; translating a click
/// position into a cell is the input layer's job. It holds no grid state of
/// its own, only a work-list buffer that is reused across fills.
pub struct FloodFillEngine {
    worklist: Vec<CellCoord>,
}

impl FloodFillEngine {
    pub fn new() -> Self {
        Self {
            worklist: Vec::with_capacity(256),
        }
    }

    /// Recolors the maximal 4-connected region of cells matching the seed's
    /// color, and nothing outside it. Returns the number of cells recolored.
    ///
    /// Filling a region with its own color is a no-op: without the early
    /// return the seed would never stop matching the target and the walk
    /// would requeue forever. Matching via the live cell color also bounds
    /// revisits, since a filled cell stops matching the target immediately.
    pub fn fill(
        &mut self,
        grid: &mut PixelGrid,
        seed: CellCoord,
        fill_color: Color32,
    ) -> EditorResult<usize> {
        let target = grid.get(seed)?;
        if target == fill_color {
            return Ok(0);
        }

        let mut filled = 0;
        self.worklist.clear();
        self.worklist.push(seed);

        while let Some(coord) = self.worklist.pop() {
            // A cell may be queued more than once; only the first visit
            // still matches the target.
            if grid.get(coord)? != target {
                continue;
            }
            grid.set(coord, fill_color)?;
            filled += 1;

            let CellCoord { col, row } = coord;
            if col > 0 {
                self.worklist.push(CellCoord::new(col - 1, row));
            }
            if col + 1 < grid.width() {
                self.worklist.push(CellCoord::new(col + 1, row));
            }
            if row > 0 {
                self.worklist.push(CellCoord::new(col, row - 1));
            }
            if row + 1 < grid.height() {
                self.worklist.push(CellCoord::new(col, row + 1));
            }
        }

        log::debug!(
            "flood fill from ({}, {}) recolored {} cells",
            seed.col,
            seed.row,
            filled
        );
        Ok(filled)
    }
}

impl Default for FloodFillEngine {
    fn default() -> Self {
        Self::new()
    }
}
