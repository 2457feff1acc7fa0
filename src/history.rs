use crate::grid::{GridSnapshot, PixelGrid};

/// Default cap on stored undo snapshots.
pub const DEFAULT_MAX_ENTRIES: usize = 64;

/// Snapshot-based undo/redo history for a [`PixelGrid`].
///
/// Every discrete edit stores a full pre-edit copy of the grid. Full
/// snapshots trade memory for total correctness regardless of edit type:
/// paint, erase and flood fill all produce exactly one entry.
///
/// `undo` restores the popped pre-edit snapshot and pushes a snapshot of the
/// current grid onto the redo stack, so the very first undo after the first
/// edit reverts it — there is no depth at which undo silently stops
/// restoring.
pub struct HistoryStack {
    undo_entries: Vec<GridSnapshot>,
    redo_entries: Vec<GridSnapshot>,
    max_entries: usize,
}

impl HistoryStack {
    /// Creates an empty history with the default snapshot cap.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTRIES)
    }

    /// Creates an empty history that keeps at most `max_entries` undo
    /// snapshots, evicting the oldest on overflow.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            undo_entries: Vec::new(),
            redo_entries: Vec::new(),
            max_entries,
        }
    }

    /// Records the grid's current state ahead of an edit.
    ///
    /// Must be called once per discrete user edit, before the edit mutates
    /// the grid. Any fresh edit invalidates redo history, so the redo stack
    /// is cleared unconditionally.
    pub fn record_before_edit(&mut self, grid: &PixelGrid) {
        self.undo_entries.push(grid.snapshot());
        if self.undo_entries.len() > self.max_entries {
            self.undo_entries.remove(0);
        }
        self.redo_entries.clear();
        log::trace!(
            "recorded snapshot, undo depth {}",
            self.undo_entries.len()
        );
    }

    /// Reverts the most recent edit. Returns `false` if there is nothing to
    /// undo; an empty stack is a defined no-op, not an error.
    pub fn undo(&mut self, grid: &mut PixelGrid) -> bool {
        let Some(snapshot) = self.undo_entries.pop() else {
            return false;
        };
        self.redo_entries.push(grid.snapshot());
        grid.restore(&snapshot);
        true
    }

    /// Re-applies the most recently undone edit. Returns `false` if there is
    /// nothing to redo.
    pub fn redo(&mut self, grid: &mut PixelGrid) -> bool {
        let Some(snapshot) = self.redo_entries.pop() else {
            return false;
        };
        self.undo_entries.push(grid.snapshot());
        grid.restore(&snapshot);
        true
    }

    /// Returns true if there are edits that can be undone.
    pub fn can_undo(&self) -> bool {
        !self.undo_entries.is_empty()
    }

    /// Returns true if there are undone edits that can be re-applied.
    pub fn can_redo(&self) -> bool {
        !self.redo_entries.is_empty()
    }

    /// Drops all stored snapshots.
    pub fn clear(&mut self) {
        self.undo_entries.clear();
        self.redo_entries.clear();
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}
