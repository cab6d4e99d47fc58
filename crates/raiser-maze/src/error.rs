//! Maze error types.

/// Errors produced while parsing a maze description or querying the grid.
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    /// The description is not valid JSON for the expected shape.
    #[error("failed to parse maze description: {0}")]
    Parse(#[source] serde_json::Error),

    /// The description parsed but its contents are inconsistent.
    #[error("invalid maze description: {0}")]
    InvalidDescription(String),

    /// A world position maps to a cell outside the code table.
    #[error("position maps to cell ({row}, {col}) outside the maze")]
    OutOfBounds { row: i64, col: i64 },
}
