//! Filesystem utilities.

use gitsecret_types::{GitSecretError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Expand a leading tilde to the home directory.
pub fn expand_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }

    path.to_path_buf()
}

/// Read a whole file, describing the failed operation as `what`.
pub fn read_bytes(path: impl AsRef<Path>, what: &'static str) -> Result<Vec<u8>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading file");
    fs::read(path).map_err(|e| GitSecretError::file_read(what, path, e))
}

/// Write `content` to `path`, creating missing parent directories.
pub fn write_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}
