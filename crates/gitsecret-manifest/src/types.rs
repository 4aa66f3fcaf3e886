//! The generated manifest artifact.

use gitsecret_types::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// A manifest file: where it goes and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Path relative to the caller's root directory
    pub path: PathBuf,
    /// YAML document, starting with `---`
    pub content: String,
}

impl Manifest {
    /// Write the manifest under `root_dir`, creating parent directories.
    ///
    /// Returns the full path written.
    pub fn write_file(&self, root_dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = root_dir.as_ref().join(&self.path);
        gitsecret_core::util::write_file(&path, &self.content)?;
        info!(path = %path.display(), "manifest written");
        Ok(path)
    }
}
