//! Error type for import and export.

use std::fmt;
use std::io;

use smog_core::SmogError;

/// Errors from reading or writing smog tables and point files.
#[derive(Debug)]
pub enum ExportError {
    /// The underlying reader or writer failed.
    Io(io::Error),
    /// A CSV record could not be parsed or serialized.
    Csv(csv::Error),
    /// The data itself was rejected (mismatched lengths, bad section bounds).
    Core(SmogError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Csv(e) => write!(f, "CSV error: {e}"),
            Self::Core(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            Self::Core(e) => Some(e),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl From<SmogError> for ExportError {
    fn from(e: SmogError) -> Self {
        Self::Core(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn core_error_is_chained() {
        let err = ExportError::from(SmogError::ShapeMismatch {
            positions: 2,
            masses: 3,
        });
        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            SmogError::ShapeMismatch {
                positions: 2,
                masses: 3
            }
            .to_string()
        );
    }

    #[test]
    fn io_error_display() {
        let err = ExportError::from(io::Error::other("disk full"));
        assert_eq!(err.to_string(), "I/O error: disk full");
    }
}
