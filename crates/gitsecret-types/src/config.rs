//! Configuration types and structures.

use serde::{Deserialize, Serialize};
use crate::enums::{EcdsaCurve, KeyAlgorithm, LogLevel};

/// Log configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Optional log file; stderr is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Log level for this output
    #[serde(default = "default_log_level")]
    pub level: LogLevel,
    /// Log format (pretty, json, compact)
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_format() -> LogFormat {
    LogFormat::Compact
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format with colors
    Pretty,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Defaults applied to options the caller leaves unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Namespace of the generated secret
    pub namespace: String,
    /// Root directory manifests are written under
    pub target_path: String,
    /// File name of the manifest inside the namespace directory
    pub manifest_file: String,
    /// Algorithm for generated keys
    pub key_algorithm: KeyAlgorithm,
    /// RSA modulus size
    pub rsa_bits: usize,
    /// ECDSA curve
    pub ecdsa_curve: EcdsaCurve,
    /// Logging
    pub log: LogConfig,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            namespace: "flux-system".to_string(),
            target_path: ".".to_string(),
            manifest_file: "secret.yaml".to_string(),
            key_algorithm: KeyAlgorithm::Ecdsa,
            rsa_bits: 2048,
            ecdsa_curve: EcdsaCurve::P384,
            log: LogConfig::default(),
        }
    }
}
