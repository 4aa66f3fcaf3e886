//! # gitsecret Types
//!
//! Core types, traits, and enums shared across all gitsecret crates.
//!
//! This crate provides the fundamental building blocks for generating Git
//! authentication secrets, including:
//!
//! - Key algorithm and curve enums with string parsing
//! - The [`KeyPair`] value and the [`KeyGenSpec`] generation request
//! - The [`KeyMaterialProvider`] trait behind which SSH operations live
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use gitsecret_types::{EcdsaCurve, KeyAlgorithm, KeyGenSpec};
//!
//! let algorithm: KeyAlgorithm = "ecdsa".parse().unwrap();
//! let spec = KeyGenSpec::new(algorithm, 2048, EcdsaCurve::P384);
//! assert_eq!(spec, KeyGenSpec::Ecdsa { curve: EcdsaCurve::P384 });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod enums;
pub mod keys;
pub mod traits;
pub mod config;

// Re-export common types for convenience
pub use errors::{GitSecretError, Result};
pub use enums::{EcdsaCurve, KeyAlgorithm, LogLevel};
pub use keys::{KeyGenSpec, KeyPair};
pub use traits::KeyMaterialProvider;
