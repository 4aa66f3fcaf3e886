//! Logging system for gitsecret.
//!
//! Installs a global `tracing` subscriber. `RUST_LOG` takes precedence over
//! the configured level.

use crate::util::fs::expand_path;
use gitsecret_types::config::{LogConfig, LogFormat};
use gitsecret_types::{GitSecretError, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Initialize logging from configuration.
///
/// When a log file is configured the returned guard must be kept alive until
/// exit, or buffered lines are lost.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_filter()));

    let (writer, guard) = match &config.path {
        Some(path) => {
            let path = expand_path(path);
            let file_name = path.file_name().ok_or_else(|| {
                GitSecretError::Config(format!("Log path has no file name: {}", path.display()))
            })?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(config.path.is_none())
        .with_target(false)
        .with_level(true);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    installed.map_err(|e| GitSecretError::Other(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}
