//! # gitsecret Core
//!
//! Configuration management, logging, and filesystem helpers shared by the
//! gitsecret library and binary.
//!
//! This crate provides:
//!
//! - **Configuration**: Layered configuration (defaults, file, programmatic, environment)
//! - **Logging**: `tracing` subscriber setup from a [`LogConfig`](gitsecret_types::config::LogConfig)
//! - **File Operations**: path expansion, reads with context, manifest writes
//!
//! ## Example
//!
//! ```no_run
//! use gitsecret_core::config::Config;
//!
//! let config = Config::load("gitsecret.yaml")?.with_env_prefix("GITSECRET");
//! let defaults = config.defaults()?;
//! let _guard = gitsecret_core::log::init(&defaults.log)?;
//! # Ok::<(), gitsecret_core::GitSecretError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod log;
pub mod util;

// Re-export commonly used items
pub use config::Config;
pub use gitsecret_types::{GitSecretError, Result};

/// gitsecret application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// gitsecret application name
pub const APP_NAME: &str = "gitsecret";
