//! Generator input and credential mode selection.

use gitsecret_types::config::Defaults;
use gitsecret_types::{EcdsaCurve, KeyAlgorithm, KeyGenSpec, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Everything the generator needs to produce one Secret manifest.
///
/// Username/password, an existing private key and a generated key are
/// mutually exclusive; see [`CredentialMode::select`] for the precedence.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Secret name
    pub name: String,
    /// Secret namespace, also the directory under `target_path`
    pub namespace: String,
    /// Root directory of the manifest path
    pub target_path: String,
    /// Manifest file name
    pub manifest_file: String,
    /// Basic auth username
    pub username: String,
    /// Basic auth password
    pub password: String,
    /// PEM private key to use instead of generating one
    pub private_key_path: Option<PathBuf>,
    /// Algorithm of the key to generate, as given by the caller
    pub private_key_algorithm: Option<String>,
    /// RSA modulus size for generated RSA keys
    pub rsa_key_bits: usize,
    /// Curve for generated ECDSA keys
    pub ecdsa_curve: EcdsaCurve,
    /// CA certificate for TLS Git servers
    pub ca_file_path: Option<PathBuf>,
    /// SSH host (optionally `host:port`) whose key goes into known_hosts
    pub ssh_hostname: String,
}

impl Options {
    /// Options seeded from configured defaults, with no credentials set.
    pub fn from_defaults(defaults: &Defaults) -> Self {
        Self {
            namespace: defaults.namespace.clone(),
            target_path: defaults.target_path.clone(),
            manifest_file: defaults.manifest_file.clone(),
            rsa_key_bits: defaults.rsa_bits,
            ecdsa_curve: defaults.ecdsa_curve,
            ..Self::default()
        }
    }

    /// Whether basic auth credentials were given.
    pub fn has_basic_auth(&self) -> bool {
        !self.username.is_empty() || !self.password.is_empty()
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("name", &self.name)
            .field("namespace", &self.namespace)
            .field("target_path", &self.target_path)
            .field("manifest_file", &self.manifest_file)
            .field("username", &self.username)
            .field("password", &if self.password.is_empty() { "" } else { "<redacted>" })
            .field("private_key_path", &self.private_key_path)
            .field("private_key_algorithm", &self.private_key_algorithm)
            .field("rsa_key_bits", &self.rsa_key_bits)
            .field("ecdsa_curve", &self.ecdsa_curve)
            .field("ca_file_path", &self.ca_file_path)
            .field("ssh_hostname", &self.ssh_hostname)
            .finish()
    }
}

/// The single credential branch a generator run takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialMode<'a> {
    /// Username and/or password; no key material
    Basic,
    /// Existing private key at the given path
    LoadedKey(&'a Path),
    /// Freshly generated key
    GeneratedKey(KeyGenSpec),
    /// No credentials besides an optional CA file
    None,
}

impl<'a> CredentialMode<'a> {
    /// Pick the mode for `options`. First match wins: basic auth, then a
    /// key file, then a key algorithm.
    ///
    /// An algorithm name with no generator fails with
    /// [`UnsupportedAlgorithm`](gitsecret_types::GitSecretError::UnsupportedAlgorithm).
    pub fn select(options: &'a Options) -> Result<Self> {
        if options.has_basic_auth() {
            return Ok(CredentialMode::Basic);
        }

        if let Some(path) = options
            .private_key_path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
        {
            return Ok(CredentialMode::LoadedKey(path));
        }

        match options.private_key_algorithm.as_deref() {
            Some(name) if !name.is_empty() => {
                let algorithm: KeyAlgorithm = name.parse()?;
                Ok(CredentialMode::GeneratedKey(KeyGenSpec::new(
                    algorithm,
                    options.rsa_key_bits,
                    options.ecdsa_curve,
                )))
            }
            _ => Ok(CredentialMode::None),
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            CredentialMode::Basic => "basic-auth",
            CredentialMode::LoadedKey(_) => "private-key-file",
            CredentialMode::GeneratedKey(_) => "generated-key",
            CredentialMode::None => "none",
        }
    }
}
