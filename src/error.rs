//! Error types for config loading and saving.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by config load/save operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem read, directory creation, or write failure.
    #[error("config file {path}: {source}")]
    Io {
        /// The offending path.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The document is malformed or a field has the wrong type. The
    /// serde_yaml error carries the position within the document.
    #[error("invalid config file {path}: {source}")]
    Parse {
        /// Path of the document that failed to parse.
        path: PathBuf,
        /// Parse failure with location.
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigError {
    /// The path the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Io { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = ConfigError::Io {
            path: PathBuf::from("/tmp/keel.yml"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/tmp/keel.yml"));
    }

    #[test]
    fn test_parse_error_display_includes_cause() {
        let source =
            serde_yaml::from_str::<crate::config::Config>("debug: [unclosed").unwrap_err();
        let err = ConfigError::Parse {
            path: PathBuf::from("keel.yml"),
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("keel.yml"));
        assert!(msg.contains("invalid config file"));
    }

    #[test]
    fn test_path_accessor() {
        let err = ConfigError::Io {
            path: PathBuf::from("a/b.yml"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.path(), &PathBuf::from("a/b.yml"));
    }
}
