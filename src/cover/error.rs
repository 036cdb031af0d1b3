//! Error types for cover operations

use std::fmt;
use std::io;

/// Errors related to cover operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverError {
    /// Attempted to add a term whose width does not match the cover
    WidthMismatch {
        /// The cover's input count
        expected: usize,
        /// The width of the rejected term
        actual: usize,
    },
}

impl fmt::Display for CoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverError::WidthMismatch { expected, actual } => write!(
                f,
                "Term width {} does not match cover input count {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for CoverError {}

impl From<CoverError> for io::Error {
    fn from(err: CoverError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_mismatch_display() {
        let err = CoverError::WidthMismatch {
            expected: 4,
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("width 3"));
        assert!(msg.contains("input count 4"));
    }

    #[test]
    fn test_cover_error_to_io_error() {
        let err = CoverError::WidthMismatch {
            expected: 2,
            actual: 5,
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
