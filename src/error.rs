use thiserror::Error;

/// Errors surfaced by the editor core.
///
/// The only condition with an error type is a coordinate outside the grid,
/// and even that is a programming-error guard: the input layer translates
/// screen positions into in-bounds cells before any intent reaches the core.
/// An empty undo or redo stack is a defined no-op, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("cell ({col}, {row}) is outside the {width}x{height} grid")]
    OutOfBounds {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },
}

/// Result type for core editing operations.
pub type EditorResult<T> = Result<T, EditorError>;
