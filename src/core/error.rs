//! Error type for diagram generation

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while turning an export file into a diagram
///
/// The `Display` form of each variant is the exact text shown to the user.
#[derive(Debug, Error)]
pub enum DiagramError {
    /// The input path does not resolve to an existing file
    #[error("Error: CSV file not found at {}", .path.display())]
    NotFound {
        /// Path as supplied by the caller
        path: PathBuf,
    },
    /// Any other read or parse failure, carrying the cause description
    #[error("An error occurred: {0}")]
    Unexpected(String),
}

impl DiagramError {
    /// Classify an error raised while opening `path`
    #[must_use]
    pub fn from_open(path: &Path, err: &io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Unexpected(err.to_string())
        }
    }
}

impl From<csv::Error> for DiagramError {
    fn from(err: csv::Error) -> Self {
        Self::Unexpected(err.to_string())
    }
}

impl From<io::Error> for DiagramError {
    fn from(err: io::Error) -> Self {
        Self::Unexpected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DiagramError::from_open(
            Path::new("data/missing.csv"),
            &io::Error::from(io::ErrorKind::NotFound),
        );
        assert_eq!(err.to_string(), "Error: CSV file not found at data/missing.csv");
    }

    #[test]
    fn test_other_open_errors_are_unexpected() {
        let err = DiagramError::from_open(
            Path::new("locked.csv"),
            &io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert!(matches!(err, DiagramError::Unexpected(_)));
        assert_eq!(err.to_string(), "An error occurred: permission denied");
    }
}
