//! Compressed secp256k1 public keys.
//!
//! The elliptic-curve math itself is a consumed capability: decoding is
//! delegated to the secp256k1 implementation re-exported by the `bitcoin`
//! crate. This module enforces the 33-byte compressed wire form and exposes
//! the canonical lowercase-hex rendering used for duplicate detection and
//! introspection.

pub mod signature;

pub use signature::Signature;

use bitcoin::secp256k1::{self, PublicKey};
use std::fmt;
use thiserror::Error;

/// Wire width of a compressed secp256k1 public key.
pub const COMPRESSED_KEY_LEN: usize = 33;

/// Key decode failures.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid key length: expected {COMPRESSED_KEY_LEN} bytes, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("not a valid EC point: {0}")]
    InvalidPoint(#[from] secp256k1::Error),
}

/// A validated compressed secp256k1 public key.
///
/// Construction goes through curve validation, so holding a value of this
/// type means the point is on the curve and its compressed serialization is
/// canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompressedKey(PublicKey);

impl CompressedKey {
    /// Decode 33 compressed-form bytes, rejecting anything that is not a
    /// point on the curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != COMPRESSED_KEY_LEN {
            return Err(KeyError::InvalidLength(bytes.len()));
        }
        Ok(Self(PublicKey::from_slice(bytes)?))
    }

    /// Decode from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        Self::from_bytes(&hex::decode(s.trim())?)
    }

    /// Canonical 33-byte compressed serialization.
    pub fn serialize(&self) -> [u8; COMPRESSED_KEY_LEN] {
        self.0.serialize()
    }

    /// Canonical lowercase hex of the compressed form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.serialize())
    }

    /// Underlying secp256k1 point.
    pub fn inner(&self) -> &PublicKey {
        &self.0
    }
}

impl fmt::Display for CompressedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
