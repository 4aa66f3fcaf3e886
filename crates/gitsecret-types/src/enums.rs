//! Common enumerations used throughout gitsecret.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{GitSecretError, Result};

/// Log level enumeration for the logging system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// No logging
    None,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Detailed trace messages
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::None => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = GitSecretError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "NONE" | "OFF" => Ok(LogLevel::None),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(GitSecretError::Validation(format!("Invalid log level: {}", s))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::None => write!(f, "NONE"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Trace => write!(f, "TRACE"),
        }
    }
}

/// SSH private key algorithms that can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAlgorithm {
    /// RSA with a configurable modulus size
    Rsa,
    /// ECDSA over a NIST curve
    Ecdsa,
    /// Ed25519
    Ed25519,
}

impl FromStr for KeyAlgorithm {
    type Err = GitSecretError;

    /// Names are matched exactly, in lowercase. Anything else yields
    /// [`GitSecretError::UnsupportedAlgorithm`] carrying the name as given.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rsa" => Ok(KeyAlgorithm::Rsa),
            "ecdsa" => Ok(KeyAlgorithm::Ecdsa),
            "ed25519" => Ok(KeyAlgorithm::Ed25519),
            _ => Err(GitSecretError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAlgorithm::Rsa => write!(f, "rsa"),
            KeyAlgorithm::Ecdsa => write!(f, "ecdsa"),
            KeyAlgorithm::Ed25519 => write!(f, "ed25519"),
        }
    }
}

/// Named elliptic curves for ECDSA keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EcdsaCurve {
    /// NIST P-256
    P256,
    /// NIST P-384
    #[default]
    P384,
    /// NIST P-521
    P521,
}

impl FromStr for EcdsaCurve {
    type Err = GitSecretError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "p256" | "p-256" | "nistp256" => Ok(EcdsaCurve::P256),
            "p384" | "p-384" | "nistp384" => Ok(EcdsaCurve::P384),
            "p521" | "p-521" | "nistp521" => Ok(EcdsaCurve::P521),
            _ => Err(GitSecretError::Validation(format!(
                "unsupported ECDSA curve: {} (can be: p256, p384, p521)",
                s
            ))),
        }
    }
}

impl fmt::Display for EcdsaCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcdsaCurve::P256 => write!(f, "p256"),
            EcdsaCurve::P384 => write!(f, "p384"),
            EcdsaCurve::P521 => write!(f, "p521"),
        }
    }
}
