//! Error types for the tour.

use thiserror::Error;

/// Result type for tour operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the tour.
#[derive(Error, Debug)]
pub enum Error {
    /// A sum was requested over no values
    #[error("cannot sum an empty list of values")]
    EmptySum,

    /// Integer addition left the range of `i64`
    #[error("integer overflow adding {lhs} and {rhs}")]
    IntegerOverflow { lhs: i64, rhs: i64 },

    /// An integer does not fit in an `i64`
    #[error("integer {0} does not fit in an i64")]
    IntegerOutOfRange(String),

    /// Writing the demonstration output failed
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
