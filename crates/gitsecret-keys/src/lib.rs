//! # gitsecret Keys
//!
//! SSH key material for Git deploy secrets.
//!
//! Provides:
//! - Loading PEM private keys (OpenSSH, PKCS#1 and PKCS#8 RSA) and deriving
//!   their authorized-keys line
//! - Generating RSA, ECDSA and Ed25519 key pairs
//! - Scanning a server's SSH host key into known-hosts format
//! - [`SshKeyProvider`], the production [`KeyMaterialProvider`](gitsecret_types::KeyMaterialProvider)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encoding;
pub mod loader;
pub mod generator;
pub mod scanner;
pub mod provider;

pub use loader::load_key_pair;
pub use generator::generate_key_pair;
pub use scanner::{scan_host_key, with_default_port, DEFAULT_SSH_PORT};
pub use provider::SshKeyProvider;
