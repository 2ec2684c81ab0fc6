//! Error types and handling for the raceboard application.

use std::fmt;

/// Custom error type for raceboard operations
#[derive(Debug)]
pub enum Error {
    /// I/O related errors (output stream failures)
    Io(std::io::Error),
    /// Malformed timestamp in a lap log
    Timestamp {
        file: String,
        line: usize,
        source: chrono::format::ParseError,
    },
    /// Roster line that does not split into abbreviation/name/company
    Roster {
        file: String,
        line: usize,
        message: String,
    },
    /// Roster abbreviation absent from one of the lap logs
    MissingKey { abbreviation: String, log: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Timestamp { file, line, source } => {
                write!(f, "malformed timestamp at {}:{}: {}", file, line, source)
            }
            Error::Roster { file, line, message } => {
                write!(f, "malformed roster line at {}:{}: {}", file, line, message)
            }
            Error::MissingKey { abbreviation, log } => {
                write!(f, "abbreviation '{}' has no entry in {}", abbreviation, log)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Timestamp { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;
