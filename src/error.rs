//! Error types for geo-tsp.

use thiserror::Error;

/// Main error type for loading, validating, and solving instances.
#[derive(Debug, Error)]
pub enum TspError {
    /// Underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A token in the point file could not be interpreted.
    #[error("Malformed input at line {line}: {message}")]
    Parse {
        /// 1-based line number of the offending token.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// The header count disagrees with the number of records present.
    #[error("Point count mismatch: header declares {declared}, found {found}")]
    CountMismatch { declared: usize, found: usize },

    /// A coordinate is non-finite or outside its valid range.
    #[error("Invalid coordinate for point {index} ({label}): {reason}")]
    InvalidCoordinate {
        index: usize,
        label: String,
        reason: String,
    },

    /// A tour handed to a sink is not a permutation.
    #[error("Invalid tour: {0}")]
    InvalidTour(String),

    /// Error in solver configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The instance has no points to visit.
    #[error("Empty instance: at least one point is required")]
    EmptyInstance,
}

/// Result type alias for geo-tsp operations.
pub type Result<T> = std::result::Result<T, TspError>;
