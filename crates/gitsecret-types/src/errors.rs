//! Error types for gitsecret operations.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for gitsecret operations.
///
/// Every failure aborts manifest generation; nothing here is retried or
/// downgraded to a warning.
#[derive(Error, Debug)]
pub enum GitSecretError {
    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A named input file could not be read
    #[error("failed to {what}: {source}")]
    FileRead {
        /// What was being read, e.g. "read CA file"
        what: &'static str,
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O cause
        #[source]
        source: std::io::Error,
    },

    /// Malformed PEM or unparseable private key
    #[error("{0}")]
    KeyFormat(String),

    /// Key algorithm name that no generator exists for
    #[error("unsupported public key algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Failure reported by the key generator
    #[error("key pair generation failed, error: {0}")]
    KeyGeneration(String),

    /// SSH host key scan failed or timed out
    #[error("SSH key scan for host {host} failed, error: {reason}")]
    HostKeyScan {
        /// Host and port that was scanned
        host: String,
        /// Underlying cause
        reason: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal bug - should never happen in production
    #[error("Bug detected: {0}\n\nThis is an internal error. Please report this issue at:\nhttps://github.com/gitsecret/gitsecret/issues")]
    Bug(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl GitSecretError {
    /// Wrap an I/O error raised while reading `path`.
    pub fn file_read(what: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GitSecretError::FileRead {
            what,
            path: path.into(),
            source,
        }
    }
}

/// A specialized Result type for gitsecret operations.
pub type Result<T> = std::result::Result<T, GitSecretError>;

/// Helper macro to create and return a GitSecretError::Bug
///
/// This should be used for conditions that should never occur
/// in normal operation and indicate a bug in gitsecret itself.
///
/// # Example
///
/// ```ignore
/// if some_impossible_condition {
///     bug!("This should never happen: {:?}", condition);
/// }
/// ```
#[macro_export]
macro_rules! bug {
    ($msg:expr) => {
        return Err($crate::GitSecretError::Bug($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::GitSecretError::Bug(format!($fmt, $($arg)*)))
    };
}

/// Helper macro to bail out with a GitSecretError
///
/// This is used for expected error conditions.
///
/// # Example
///
/// ```ignore
/// if !valid {
///     bail!(Validation, "Invalid option: {}", reason);
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::GitSecretError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::GitSecretError::$variant(format!($fmt, $($arg)*)))
    };
    ($msg:expr) => {
        return Err($crate::GitSecretError::Other($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::GitSecretError::Other(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject(name: &str) -> Result<()> {
        bail!(UnsupportedAlgorithm, name)
    }

    #[test]
    fn test_file_read_keeps_cause() {
        let err = GitSecretError::file_read(
            "read CA file",
            "/nope/ca.crt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(err.to_string(), "failed to read CA file: No such file or directory");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_host_key_scan_names_host() {
        let err = GitSecretError::HostKeyScan {
            host: "git.example.com:22".to_string(),
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("git.example.com:22"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_bail_with_variant() {
        let err = reject("dsa").unwrap_err();
        assert_eq!(err.to_string(), "unsupported public key algorithm: dsa");
    }
}
