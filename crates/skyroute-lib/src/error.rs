use thiserror::Error;

/// Convenient result alias for the Skyroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Input ended before the named field could be read.
    #[error("input ended while reading {field}")]
    TruncatedInput { field: &'static str },

    /// Raised when a token is not a non-negative integer.
    #[error("invalid value for {field}: '{token}'")]
    InvalidToken { field: &'static str, token: String },

    /// Raised when either grid dimension is zero.
    #[error("grid dimensions must be at least 1x1, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    /// Raised when the claimed dimensions overflow the addressable cell count.
    #[error("grid dimensions {rows}x{cols} are too large to represent")]
    OversizedGrid { rows: usize, cols: usize },

    /// Raised when a charging station lies outside the grid.
    #[error("charging station ({row}, {col}) is outside the {rows}x{cols} grid")]
    StationOutOfBounds {
        row: u64,
        col: u64,
        rows: usize,
        cols: usize,
    },

    /// Raised when tokens remain after the scenario was fully read.
    #[error("unexpected trailing input after the charging station list")]
    TrailingInput,

    /// Raised when a computed flight plan lacks any steps.
    #[error("flight plan was empty")]
    EmptyFlightPlan,

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
