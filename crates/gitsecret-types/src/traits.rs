//! Core trait definitions for gitsecret abstractions.

use std::path::Path;
use std::time::Duration;
use crate::errors::Result;
use crate::keys::{KeyGenSpec, KeyPair};

/// Trait for SSH key material backends.
///
/// The manifest generator only talks to SSH tooling through this trait, so
/// tests can substitute a fake for the real key parser and network probe.
pub trait KeyMaterialProvider: Send + Sync {
    /// Load a private key from a PEM file and derive its public key.
    ///
    /// The returned private key is the file's full contents.
    fn load_key_pair(&self, path: &Path) -> Result<KeyPair>;

    /// Generate a fresh key pair.
    fn generate_key_pair(&self, spec: &KeyGenSpec) -> Result<KeyPair>;

    /// Fetch the host key of an SSH server at `host` (`host:port`).
    ///
    /// Returns the key as a known-hosts line.
    fn scan_host_key(&self, host: &str, timeout: Duration) -> Result<Vec<u8>>;

    /// Get the provider name (e.g., "ssh2").
    fn provider_name(&self) -> &'static str;
}
