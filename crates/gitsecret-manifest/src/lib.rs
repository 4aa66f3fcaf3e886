//! # gitsecret Manifest
//!
//! Builds the Kubernetes Secret manifest a GitOps source controller reads its
//! Git credentials from.
//!
//! The pipeline is linear: pick the credential mode, resolve or generate key
//! material, scan the Git host's key, fill the Secret's `stringData`,
//! serialize to YAML and wrap the text with its target path.
//!
//! ## Example
//!
//! ```no_run
//! use gitsecret_manifest::{generate, Options};
//!
//! let options = Options {
//!     name: "flux-system".to_string(),
//!     namespace: "flux-system".to_string(),
//!     target_path: "clusters/prod".to_string(),
//!     manifest_file: "secret.yaml".to_string(),
//!     private_key_algorithm: Some("ed25519".to_string()),
//!     ssh_hostname: "github.com".to_string(),
//!     ..Options::default()
//! };
//!
//! let manifest = generate(&options)?;
//! manifest.write_file(".")?;
//! # Ok::<(), gitsecret_types::GitSecretError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod options;
pub mod secret;
pub mod types;
pub mod generator;

pub use options::{CredentialMode, Options};
pub use secret::{
    resource_to_string, Secret, CA_FILE_SECRET_KEY, KNOWN_HOSTS_SECRET_KEY, PASSWORD_SECRET_KEY,
    PRIVATE_KEY_SECRET_KEY, PUBLIC_KEY_SECRET_KEY, USERNAME_SECRET_KEY,
};
pub use types::Manifest;
pub use generator::{generate, generate_with, HOST_KEY_SCAN_TIMEOUT};
