//! All error types for the arbaudit crate.
//!
//! These are returned from every fallible operation (reading, parsing, scanning).

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("I/O error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {path}: {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Wraps an I/O error with the path that caused it.
    pub fn read_error(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wraps a JSON error with the path of the malformed document.
    pub fn parse_error(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Error::ParseFile {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::Parse(json_error);
        assert!(error.to_string().contains("parse error"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = Error::parse_error("lib/l10n/app_de.arb", json_error);
        let display = error.to_string();
        assert!(display.starts_with("parse error in lib/l10n/app_de.arb"));
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_read_error_names_file() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = Error::read_error("tenants_page.dart", io_error);
        assert_eq!(error.to_string(), "I/O error reading tenants_page.dart: denied");
    }

    #[test]
    fn test_invalid_resource_error() {
        let error = Error::InvalidResource("top-level value is not an object".to_string());
        assert_eq!(error.to_string(), "invalid resource: top-level value is not an object");
    }

    #[test]
    fn test_validation_error() {
        let error = Error::validation_error("pattern cannot be empty");
        assert_eq!(error.to_string(), "validation error: pattern cannot be empty");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::InvalidResource("test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidResource"));
        assert!(debug.contains("test"));
    }
}
