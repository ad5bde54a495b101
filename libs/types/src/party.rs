//! Identity types for ledger participants
//!
//! A participant is an opaque handle pairing a display name with the
//! Ed25519 verifying key that owns it. Contract logic compares and
//! collects identities by their key projection only; the display name
//! is never load-bearing.

use ed25519_dalek::VerifyingKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparable, hashable projection of an Ed25519 verifying key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    /// Create from raw key bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(key: VerifyingKey) -> Self {
        Self(key.to_bytes())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// A named ledger participant
///
/// Equality derives over both fields, but required-signer computation
/// and all contract-level set membership operate on [`PublicKey`]
/// values obtained via [`Party::key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Party {
    name: String,
    key: PublicKey,
}

impl Party {
    /// Create a party from a display name and owning key
    pub fn new(name: impl Into<String>, key: PublicKey) -> Self {
        Self {
            name: name.into(),
            key,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owning key projection
    pub fn key(&self) -> &PublicKey {
        &self.key
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
