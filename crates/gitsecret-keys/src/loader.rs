//! Loading existing private keys from disk.

use crate::encoding::authorized_key;
use gitsecret_core::util::read_bytes;
use gitsecret_types::{GitSecretError, KeyPair, Result};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::{AssociatedOid, DecodePrivateKey, ObjectIdentifier, PrivateKeyInfo};
use rsa::RsaPrivateKey;
use sec1::EcPrivateKey;
use ssh_key::private::{EcdsaKeypair, Ed25519Keypair, KeypairData, RsaKeypair};
use ssh_key::PrivateKey;
use std::fmt;
use std::path::Path;
use tracing::debug;

const OPENSSH_TAG: &str = "OPENSSH PRIVATE KEY";
const PKCS1_RSA_TAG: &str = "RSA PRIVATE KEY";
const SEC1_EC_TAG: &str = "EC PRIVATE KEY";
const PKCS8_TAG: &str = "PRIVATE KEY";

/// Load a PEM private key and derive its public key.
///
/// The returned private key is the file's full contents, not just the
/// decoded block.
pub fn load_key_pair(path: &Path) -> Result<KeyPair> {
    let bytes = read_bytes(path, "open private key file")?;

    let block = pem::parse(&bytes)
        .map_err(|e| GitSecretError::KeyFormat(format!("failed to decode PEM block: {}", e)))?;

    let key = parse_private_key(&block)?;
    debug!(
        path = %path.display(),
        algorithm = %key.algorithm(),
        "loaded private key"
    );

    Ok(KeyPair {
        public_key: authorized_key(key.public_key())?,
        private_key: bytes,
    })
}

/// Parse the payload of a decoded PEM block as a private key.
///
/// Accepts OpenSSH keys of any algorithm, PKCS#1 RSA, SEC1 ECDSA and
/// PKCS#8 RSA, ECDSA or Ed25519 keys.
pub fn parse_private_key(block: &pem::Pem) -> Result<PrivateKey> {
    let der = block.contents();
    let keypair = match block.tag() {
        OPENSSH_TAG => {
            let key = PrivateKey::from_bytes(der).map_err(|e| {
                GitSecretError::KeyFormat(format!("failed to parse OpenSSH private key: {}", e))
            })?;
            if key.is_encrypted() {
                return Err(GitSecretError::KeyFormat(
                    "private key is protected by a passphrase".to_string(),
                ));
            }
            return Ok(key);
        }
        PKCS1_RSA_TAG => {
            let key = RsaPrivateKey::from_pkcs1_der(der).map_err(|e| format_error("PKCS#1", e))?;
            rsa_keypair(key)?
        }
        SEC1_EC_TAG => parse_sec1(der)?,
        PKCS8_TAG => parse_pkcs8(der)?,
        other => {
            return Err(GitSecretError::KeyFormat(format!(
                "unsupported private key type: {}",
                other
            )))
        }
    };

    PrivateKey::new(keypair, "")
        .map_err(|e| GitSecretError::KeyFormat(format!("invalid private key: {}", e)))
}

fn parse_sec1(der: &[u8]) -> Result<KeypairData> {
    let fail = |e: &dyn fmt::Display| format_error("SEC1", e);
    let info = EcPrivateKey::try_from(der).map_err(|e| fail(&e))?;
    let curve = info
        .parameters
        .and_then(|params| params.named_curve())
        .ok_or_else(|| GitSecretError::KeyFormat("SEC1 private key names no curve".to_string()))?;

    let keypair = if curve == p256::NistP256::OID {
        p256_keypair(p256::SecretKey::from_sec1_der(der).map_err(|e| fail(&e))?)
    } else if curve == p384::NistP384::OID {
        p384_keypair(p384::SecretKey::from_sec1_der(der).map_err(|e| fail(&e))?)
    } else if curve == p521::NistP521::OID {
        p521_keypair(p521::SecretKey::from_sec1_der(der).map_err(|e| fail(&e))?)
    } else {
        return Err(unsupported_curve(curve));
    };
    Ok(KeypairData::from(keypair))
}

fn parse_pkcs8(der: &[u8]) -> Result<KeypairData> {
    let fail = |e: &dyn fmt::Display| format_error("PKCS#8", e);
    let info = PrivateKeyInfo::try_from(der).map_err(|e| fail(&e))?;
    let algorithm = info.algorithm.oid;

    if algorithm == rsa::pkcs1::ALGORITHM_OID {
        rsa_keypair(RsaPrivateKey::from_pkcs8_der(der).map_err(|e| fail(&e))?)
    } else if algorithm == ed25519_dalek::pkcs8::ALGORITHM_OID {
        let key = ed25519_dalek::SigningKey::from_pkcs8_der(der).map_err(|e| fail(&e))?;
        Ok(KeypairData::from(Ed25519Keypair::from(key)))
    } else if algorithm == p256::elliptic_curve::ALGORITHM_OID {
        let curve = info.algorithm.parameters_oid().map_err(|e| fail(&e))?;
        let keypair = if curve == p256::NistP256::OID {
            p256_keypair(p256::SecretKey::from_pkcs8_der(der).map_err(|e| fail(&e))?)
        } else if curve == p384::NistP384::OID {
            p384_keypair(p384::SecretKey::from_pkcs8_der(der).map_err(|e| fail(&e))?)
        } else if curve == p521::NistP521::OID {
            p521_keypair(p521::SecretKey::from_pkcs8_der(der).map_err(|e| fail(&e))?)
        } else {
            return Err(unsupported_curve(curve));
        };
        Ok(KeypairData::from(keypair))
    } else {
        Err(GitSecretError::KeyFormat(format!(
            "unsupported PKCS#8 key algorithm: {}",
            algorithm
        )))
    }
}

fn rsa_keypair(key: RsaPrivateKey) -> Result<KeypairData> {
    let keypair = RsaKeypair::try_from(key)
        .map_err(|e| GitSecretError::KeyFormat(format!("invalid RSA private key: {}", e)))?;
    Ok(KeypairData::from(keypair))
}

fn p256_keypair(key: p256::SecretKey) -> EcdsaKeypair {
    EcdsaKeypair::NistP256 {
        public: key.public_key().into(),
        private: key.into(),
    }
}

fn p384_keypair(key: p384::SecretKey) -> EcdsaKeypair {
    EcdsaKeypair::NistP384 {
        public: key.public_key().into(),
        private: key.into(),
    }
}

fn p521_keypair(key: p521::SecretKey) -> EcdsaKeypair {
    EcdsaKeypair::NistP521 {
        public: key.public_key().into(),
        private: key.into(),
    }
}

fn format_error(format: &str, cause: impl fmt::Display) -> GitSecretError {
    GitSecretError::KeyFormat(format!("failed to parse {} private key: {}", format, cause))
}

fn unsupported_curve(curve: ObjectIdentifier) -> GitSecretError {
    GitSecretError::KeyFormat(format!("unsupported elliptic curve: {}", curve))
}
