//! Error types for PLA format parsing and validation

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to PLA format parsing and validation
///
/// These errors occur when reading PLA data with malformed headers or
/// inconsistent term lines. The run aborts on the first of them; no
/// partial cover is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PLAError {
    /// A term line was seen before the .i directive, or .i is missing
    MissingInputDirective,
    /// PLA data is missing the .o (outputs) directive
    MissingOutputDirective,
    /// Invalid value in the .i directive
    InvalidInputDirective {
        /// The invalid value string
        value: Arc<str>,
    },
    /// Invalid value in the .o directive
    InvalidOutputDirective {
        /// The invalid value string
        value: Arc<str>,
    },
    /// Invalid value in the .p directive
    ///
    /// The declared term count is advisory and otherwise discarded, but a
    /// non-numeric argument still makes the header malformed.
    InvalidTermCountDirective {
        /// The invalid value string
        value: Arc<str>,
    },
    /// A term line's input pattern length does not equal the declared .i value
    TermWidthMismatch {
        /// 1-based line number of the offending term line
        line: usize,
        /// The declared input count
        expected: usize,
        /// The actual pattern length
        actual: usize,
    },
    /// Invalid character in the input pattern of a term line
    InvalidSymbol {
        /// The invalid character
        character: char,
        /// Position in the input pattern
        position: usize,
    },
}

impl fmt::Display for PLAError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAError::MissingInputDirective => {
                write!(f, "PLA data missing .i directive before term lines")
            }
            PLAError::MissingOutputDirective => {
                write!(f, "PLA data missing .o directive")
            }
            PLAError::InvalidInputDirective { value } => {
                write!(f, "Invalid .i directive value: '{}'", value)
            }
            PLAError::InvalidOutputDirective { value } => {
                write!(f, "Invalid .o directive value: '{}'", value)
            }
            PLAError::InvalidTermCountDirective { value } => {
                write!(f, "Invalid .p directive value: '{}'", value)
            }
            PLAError::TermWidthMismatch {
                line,
                expected,
                actual,
            } => write!(
                f,
                "Input pattern on line {} has {} symbols, but .i declares {}",
                line, actual, expected
            ),
            PLAError::InvalidSymbol {
                character,
                position,
            } => write!(
                f,
                "Invalid input symbol '{}' at position {}",
                character, position
            ),
        }
    }
}

impl std::error::Error for PLAError {}

impl From<PLAError> for io::Error {
    fn from(err: PLAError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur when reading PLA format data
///
/// This error type is returned by the `PLAReader` methods.
#[derive(Debug)]
pub enum PLAReadError {
    /// PLA format error
    PLA(PLAError),
    /// IO error during reading
    Io(io::Error),
}

impl fmt::Display for PLAReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAReadError::PLA(e) => write!(f, "PLA format error: {}", e),
            PLAReadError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PLAReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PLAReadError::PLA(e) => Some(e),
            PLAReadError::Io(e) => Some(e),
        }
    }
}

impl From<PLAError> for PLAReadError {
    fn from(err: PLAError) -> Self {
        PLAReadError::PLA(err)
    }
}

impl From<io::Error> for PLAReadError {
    fn from(err: io::Error) -> Self {
        PLAReadError::Io(err)
    }
}

impl From<PLAReadError> for io::Error {
    fn from(err: PLAReadError) -> Self {
        match err {
            PLAReadError::Io(e) => e,
            PLAReadError::PLA(e) => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}

/// Errors that can occur when writing PLA format data
///
/// This error type is returned by the `PLAWriter` methods.
#[derive(Debug)]
pub enum PLAWriteError {
    /// IO error during writing
    Io(io::Error),
}

impl fmt::Display for PLAWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAWriteError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PLAWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PLAWriteError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for PLAWriteError {
    fn from(err: io::Error) -> Self {
        PLAWriteError::Io(err)
    }
}

impl From<PLAWriteError> for io::Error {
    fn from(err: PLAWriteError) -> Self {
        match err {
            PLAWriteError::Io(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_directive_display() {
        let msg = PLAError::MissingInputDirective.to_string();
        assert!(msg.contains("missing .i directive"));
    }

    #[test]
    fn test_invalid_input_directive_display() {
        let err = PLAError::InvalidInputDirective {
            value: Arc::from("abc"),
        };
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_term_width_mismatch_display() {
        let err = PLAError::TermWidthMismatch {
            line: 5,
            expected: 4,
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 5"));
        assert!(msg.contains("3 symbols"));
        assert!(msg.contains("declares 4"));
    }

    #[test]
    fn test_invalid_symbol_display() {
        let err = PLAError::InvalidSymbol {
            character: '?',
            position: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("'?'"));
        assert!(msg.contains("position 2"));
    }

    #[test]
    fn test_read_error_from_pla_error() {
        let read_err: PLAReadError = PLAError::MissingOutputDirective.into();
        assert!(matches!(read_err, PLAReadError::PLA(_)));
    }

    #[test]
    fn test_read_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let read_err: PLAReadError = io_err.into();
        assert!(matches!(read_err, PLAReadError::Io(_)));
    }

    #[test]
    fn test_read_error_to_io_error_preserves_io_kind() {
        let original = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let io_err: io::Error = PLAReadError::Io(original).into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_pla_error_to_io_error() {
        let io_err: io::Error = PLAError::MissingInputDirective.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_write_error_to_io_error() {
        let original = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let io_err: io::Error = PLAWriteError::Io(original).into();
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    }
}
