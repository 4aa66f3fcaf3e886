//! Production key material provider.

use gitsecret_types::{KeyGenSpec, KeyMaterialProvider, KeyPair, Result};
use std::path::Path;
use std::time::Duration;

/// [`KeyMaterialProvider`] backed by `ssh-key` for key handling and
/// libssh2 for host key scans.
#[derive(Debug, Clone, Copy, Default)]
pub struct SshKeyProvider;

impl SshKeyProvider {
    /// Create a new provider.
    pub fn new() -> Self {
        Self
    }
}

impl KeyMaterialProvider for SshKeyProvider {
    fn load_key_pair(&self, path: &Path) -> Result<KeyPair> {
        crate::loader::load_key_pair(path)
    }

    fn generate_key_pair(&self, spec: &KeyGenSpec) -> Result<KeyPair> {
        crate::generator::generate_key_pair(spec)
    }

    fn scan_host_key(&self, host: &str, timeout: Duration) -> Result<Vec<u8>> {
        crate::scanner::scan_host_key(host, timeout)
    }

    fn provider_name(&self) -> &'static str {
        "ssh2"
    }
}
