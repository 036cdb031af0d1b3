//! Error types for the minimization engine

use std::fmt;
use std::io;

use crate::cover::Term;

/// Errors that can occur during a minimization run
///
/// Format-level problems are caught earlier, at the PLA boundary; the
/// variants here are either internal invariant violations (a broken
/// pipeline upstream) or the resource-exhaustion guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizationError {
    /// Two terms of different widths reached the combination primitive
    ///
    /// This indicates a bug upstream, never a normal algorithmic outcome:
    /// a correct pipeline hands the engine terms of one fixed width.
    LengthMismatch {
        /// The left operand
        left: Term,
        /// The right operand
        right: Term,
    },
    /// A minterm is covered by no prime implicant
    ///
    /// Every minterm must be covered by at least one prime implicant when
    /// the chart is built from the same term set that generated the primes,
    /// so this is a fatal consistency error.
    UncoveredMinterm {
        /// The uncovered minterm
        minterm: Term,
    },
    /// The combination loop generated more intermediate terms than allowed
    TermBudgetExceeded {
        /// The configured budget that was exceeded
        budget: usize,
    },
}

impl fmt::Display for MinimizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizationError::LengthMismatch { left, right } => write!(
                f,
                "Cannot combine terms of different widths: '{}' ({}) and '{}' ({})",
                left,
                left.len(),
                right,
                right.len()
            ),
            MinimizationError::UncoveredMinterm { minterm } => write!(
                f,
                "Minterm '{}' is covered by no prime implicant",
                minterm
            ),
            MinimizationError::TermBudgetExceeded { budget } => write!(
                f,
                "Combination loop exceeded the term budget of {} intermediate terms",
                budget
            ),
        }
    }
}

impl std::error::Error for MinimizationError {}

impl From<MinimizationError> for io::Error {
    fn from(err: MinimizationError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let err = MinimizationError::LengthMismatch {
            left: "01".parse().unwrap(),
            right: "011".parse().unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'01' (2)"));
        assert!(msg.contains("'011' (3)"));
    }

    #[test]
    fn test_uncovered_minterm_display() {
        let err = MinimizationError::UncoveredMinterm {
            minterm: "101".parse().unwrap(),
        };
        assert!(err.to_string().contains("'101'"));
    }

    #[test]
    fn test_term_budget_display() {
        let err = MinimizationError::TermBudgetExceeded { budget: 128 };
        assert!(err.to_string().contains("128"));
    }

    #[test]
    fn test_minimization_error_to_io_error() {
        let err = MinimizationError::TermBudgetExceeded { budget: 1 };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
