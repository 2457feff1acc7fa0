use egui::Color32;
use pixel_paint::{BACKGROUND, CellCoord, FloodFillEngine, HistoryStack, PixelGrid};

fn paint(grid: &mut PixelGrid, history: &mut HistoryStack, coord: CellCoord, color: Color32) {
    history.record_before_edit(grid);
    grid.set(coord, color).unwrap();
}

#[test]
fn first_undo_reverts_first_edit() {
    // Undo must restore the recorded pre-edit snapshot even when it is the
    // only entry; a single-edit history is not a special case.
    let mut grid = PixelGrid::new(4, 4);
    let mut history = HistoryStack::new();
    let coord = CellCoord::new(0, 0);

    paint(&mut grid, &mut history, coord, Color32::BLACK);
    assert_eq!(grid.get(coord).unwrap(), Color32::BLACK);

    assert!(history.undo(&mut grid));
    assert_eq!(grid.get(coord).unwrap(), BACKGROUND);
}

#[test]
fn undo_then_redo_restores_the_post_edit_state() {
    let mut grid = PixelGrid::new(4, 4);
    let mut history = HistoryStack::new();

    paint(&mut grid, &mut history, CellCoord::new(1, 2), Color32::RED);
    paint(&mut grid, &mut history, CellCoord::new(3, 0), Color32::BLUE);
    let after_edits = grid.snapshot();

    assert!(history.undo(&mut grid));
    assert_eq!(grid.get(CellCoord::new(3, 0)).unwrap(), BACKGROUND);

    assert!(history.redo(&mut grid));
    assert_eq!(grid.snapshot(), after_edits);
}

#[test]
fn empty_stacks_are_no_ops() {
    let mut grid = PixelGrid::new(4, 4);
    let mut history = HistoryStack::new();
    let untouched = grid.snapshot();

    assert!(!history.undo(&mut grid));
    assert!(!history.redo(&mut grid));
    assert_eq!(grid.snapshot(), untouched);
}

#[test]
fn a_fresh_edit_invalidates_redo_history() {
    let mut grid = PixelGrid::new(4, 4);
    let mut history = HistoryStack::new();

    paint(&mut grid, &mut history, CellCoord::new(0, 0), Color32::RED);
    assert!(history.undo(&mut grid));
    assert!(history.can_redo());

    paint(&mut grid, &mut history, CellCoord::new(1, 1), Color32::BLUE);
    assert!(!history.can_redo());
    assert!(!history.redo(&mut grid));
}

#[test]
fn capacity_cap_evicts_the_oldest_snapshot() {
    let mut grid = PixelGrid::new(4, 4);
    let mut history = HistoryStack::with_capacity(2);

    for i in 0..3 {
        paint(
            &mut grid,
            &mut history,
            CellCoord::new(i, 0),
            Color32::BLACK,
        );
    }

    // Only the two most recent edits can be unwound.
    assert!(history.undo(&mut grid));
    assert!(history.undo(&mut grid));
    assert!(!history.undo(&mut grid));

    // The first edit survives because its pre-edit snapshot was evicted.
    assert_eq!(grid.get(CellCoord::new(0, 0)).unwrap(), Color32::BLACK);
    assert_eq!(grid.get(CellCoord::new(1, 0)).unwrap(), BACKGROUND);
    assert_eq!(grid.get(CellCoord::new(2, 0)).unwrap(), BACKGROUND);
}

#[test]
fn a_flood_fill_is_one_undo_step() {
    let mut grid = PixelGrid::new(4, 4);
    let mut history = HistoryStack::new();
    let mut engine = FloodFillEngine::new();

    history.record_before_edit(&grid);
    engine
        .fill(&mut grid, CellCoord::new(0, 0), Color32::GREEN)
        .unwrap();
    assert!(grid.iter_cells().all(|(_, c)| c == Color32::GREEN));

    assert!(history.undo(&mut grid));
    assert!(grid.iter_cells().all(|(_, c)| c == BACKGROUND));
    assert!(!history.can_undo());
}

#[test]
fn stored_snapshots_are_unaffected_by_later_edits() {
    let mut grid = PixelGrid::new(4, 4);
    let mut history = HistoryStack::new();
    let coord = CellCoord::new(2, 2);

    paint(&mut grid, &mut history, coord, Color32::RED);

    // Mutate the live grid heavily without recording.
    for i in 0..4 {
        grid.set(CellCoord::new(i, i), Color32::BLUE).unwrap();
    }

    // The pre-edit snapshot still restores a pristine background grid.
    assert!(history.undo(&mut grid));
    assert!(grid.iter_cells().all(|(_, c)| c == BACKGROUND));
}
