//! The Kubernetes Secret object and its serialization.

use crate::options::Options;
use gitsecret_types::KeyPair;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `stringData` key for the basic auth username.
pub const USERNAME_SECRET_KEY: &str = "username";
/// `stringData` key for the basic auth password.
pub const PASSWORD_SECRET_KEY: &str = "password";
/// `stringData` key for the TLS CA certificate.
pub const CA_FILE_SECRET_KEY: &str = "caFile";
/// `stringData` key for the SSH private key.
pub const PRIVATE_KEY_SECRET_KEY: &str = "identity";
/// `stringData` key for the SSH public key.
pub const PUBLIC_KEY_SECRET_KEY: &str = "identity.pub";
/// `stringData` key for the Git host's known_hosts entry.
pub const KNOWN_HOSTS_SECRET_KEY: &str = "known_hosts";

/// A core/v1 Secret carrying Git credentials in `stringData`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    /// Always `v1`
    pub api_version: String,
    /// Always `Secret`
    pub kind: String,
    /// Object metadata
    pub metadata: ObjectMeta,
    /// Plain-text secret fields
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub string_data: BTreeMap<String, String>,
}

/// The subset of Kubernetes object metadata a generated Secret carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    /// Never set on generated objects; serializes as `null`
    pub creation_timestamp: Option<String>,
    /// Object name
    pub name: String,
    /// Object namespace
    pub namespace: String,
}

impl Secret {
    /// An empty Secret named after `options`.
    pub fn new(options: &Options) -> Self {
        Self {
            api_version: "v1".to_string(),
            kind: "Secret".to_string(),
            metadata: ObjectMeta {
                creation_timestamp: None,
                name: options.name.clone(),
                namespace: options.namespace.clone(),
            },
            string_data: BTreeMap::new(),
        }
    }

    /// Assemble the Secret from the resolved credential material.
    ///
    /// Key fields are only written when both a key pair and a host key are
    /// present.
    pub fn build(
        options: &Options,
        keypair: Option<&KeyPair>,
        host_key: Option<&[u8]>,
        ca_file: Option<&[u8]>,
    ) -> Self {
        let mut secret = Self::new(options);

        if options.has_basic_auth() {
            secret.insert(USERNAME_SECRET_KEY, options.username.as_bytes());
            secret.insert(PASSWORD_SECRET_KEY, options.password.as_bytes());
        }

        if let Some(ca_file) = ca_file {
            secret.insert(CA_FILE_SECRET_KEY, ca_file);
        }

        if let (Some(keypair), Some(host_key)) = (keypair, host_key) {
            secret.insert(PRIVATE_KEY_SECRET_KEY, &keypair.private_key);
            secret.insert(PUBLIC_KEY_SECRET_KEY, &keypair.public_key);
            secret.insert(KNOWN_HOSTS_SECRET_KEY, host_key);
        }

        secret
    }

    fn insert(&mut self, key: &str, value: &[u8]) {
        self.string_data
            .insert(key.to_string(), String::from_utf8_lossy(value).into_owned());
    }

    /// Serialize to YAML without the empty-field noise.
    pub fn to_yaml(&self) -> gitsecret_types::Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(resource_to_string(&yaml))
    }
}

/// Drop the `creationTimestamp: null` and `status: {}` lines that generic
/// object serialization leaves behind. Each is removed at most once.
pub fn resource_to_string(data: &str) -> String {
    data.replacen("  creationTimestamp: null\n", "", 1)
        .replacen("status: {}\n", "", 1)
}
