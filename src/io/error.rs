//! Error types for board validation and console output

use std::fmt;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// Board dimensions rejected by validation
    InvalidBoardSize {
        /// Requested width in cells
        width: usize,
        /// Requested height in cells
        height: usize,
        /// Why the dimensions were rejected
        reason: &'static str,
    },

    /// Board size text is not of the form `<width><separator><height>`
    UnparseableBoardSize {
        /// Text as supplied
        text: String,
        /// Description of the parse failure
        reason: String,
    },

    /// Writing solutions or diagnostics failed
    Output {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoardSize {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid board size {width}x{height}: {reason}")
            }
            Self::UnparseableBoardSize { text, reason } => {
                write!(f, "Cannot read board size from '{text}': {reason}")
            }
            Self::Output { operation, source } => {
                write!(f, "Output error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            operation: "write",
            source: err,
        }
    }
}

/// Attaches the name of the failing operation to I/O results
pub trait WithOperation<T> {
    /// Convert into a solver result tagged with `operation`
    ///
    /// # Errors
    ///
    /// Propagates the original error as [`SolverError::Output`]
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T> WithOperation<T> for std::io::Result<T> {
    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| SolverError::Output { operation, source })
    }
}

/// Create an invalid board size error
pub const fn invalid_board_size(width: usize, height: usize, reason: &'static str) -> SolverError {
    SolverError::InvalidBoardSize {
        width,
        height,
        reason,
    }
}

/// Create an unparseable board size error
pub fn unparseable_board_size(text: &str, reason: &impl ToString) -> SolverError {
    SolverError::UnparseableBoardSize {
        text: text.to_string(),
        reason: reason.to_string(),
    }
}
