//! Error types for request validation.

use thiserror::Error;

/// Errors raised when a generation request violates its invariants.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Element count below the minimum of one.
    #[error("Invalid size {0}: must be at least 1")]
    InvalidSize(u32),

    /// String element length below the minimum of one.
    #[error("Invalid string length {0}: must be at least 1")]
    InvalidStringLength(u32),

    /// Matrix dimensions below the minimum of one row/column.
    #[error("Invalid matrix dimensions {rows}x{columns}: rows and columns must be at least 1")]
    InvalidDimensions { rows: u32, columns: u32 },

    /// Degenerate numeric range with the lower bound above the upper bound.
    #[error("Invalid numeric range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
}
