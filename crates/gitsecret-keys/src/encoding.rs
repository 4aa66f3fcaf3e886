//! OpenSSH text encodings shared by the loader, generator and scanner.

use gitsecret_types::{GitSecretError, Result};
use ssh_key::PublicKey;

/// Encode `key` as an authorized-keys line: `<algorithm> <base64>\n`.
///
/// Any comment on the key is dropped.
pub fn authorized_key(key: &PublicKey) -> Result<Vec<u8>> {
    let line = openssh_without_comment(key)?;
    Ok(format!("{}\n", line).into_bytes())
}

/// Encode `key` as a known-hosts line for `host`.
///
/// `host` is the already normalized host field, see
/// [`crate::scanner::known_hosts_host`].
pub fn known_hosts_line(host: &str, key: &PublicKey) -> Result<Vec<u8>> {
    let line = openssh_without_comment(key)?;
    Ok(format!("{} {}\n", host, line).into_bytes())
}

fn openssh_without_comment(key: &PublicKey) -> Result<String> {
    PublicKey::from(key.key_data().clone())
        .to_openssh()
        .map_err(|e| GitSecretError::KeyFormat(format!("failed to encode public key: {}", e)))
}
