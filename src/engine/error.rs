use thiserror::Error;

/// Errors raised while constructing a [`GenerationEngine`](super::GenerationEngine).
///
/// Stepping never fails, so every variant is a construction-time error.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("grid must have at least one row and one column, got {rows}x{columns}")]
    InvalidDimension { rows: usize, columns: usize },
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    InvalidCoordinate {
        row: i64,
        column: i64,
        rows: usize,
        columns: usize,
    },
    /// Flat `row column ...` input with an odd number of values.
    #[error("expected row/column pairs, got {0} values")]
    UnpairedCoordinate(usize),
    #[error("fill rate {0} must be between 0.0 and 1.0")]
    InvalidFillRate(f64),
}

impl EngineError {
    /// Whether the error comes from the initial cells rather than the grid shape.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidCoordinate { .. } | Self::UnpairedCoordinate(_)
        )
    }
}
