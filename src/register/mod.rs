//! Account-registration transaction record.
//!
//! The wire layout is fixed-width throughout: a 33-byte registrant key, a
//! 20-byte referrer identifier, a 1-byte co-signer count followed by that
//! many 33-byte keys, and a 65-byte detached signature. Decoding is
//! all-or-nothing and serialization is canonical, so a record hashes and
//! signs identically on every node.

pub mod decode;
pub mod encode;
pub mod multisig;

pub use decode::DecodeError;
pub use encode::{ConstructError, EncodeError, RegisterTxBuilder};
pub use multisig::{MultiSigError, MultiSigValidator, MAX_MULTISIG_KEYS};

use crate::account::AccountId;
use crate::keys::{CompressedKey, Signature};
use serde_json::{json, Value};

/// A fully validated account-registration record.
///
/// Instances only come out of [`RegisterTx::decode`] or a
/// [`RegisterTxBuilder`] round trip; every structural invariant of the wire
/// format holds by construction and the record is immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterTx {
    public_key: CompressedKey,
    referrer_id: AccountId,
    multi_sig: Vec<CompressedKey>,
    signature: Signature,
}

impl RegisterTx {
    /// Public key of the account being registered.
    pub fn public_key(&self) -> &CompressedKey {
        &self.public_key
    }

    /// Identifier of the sponsoring account.
    pub fn referrer(&self) -> &AccountId {
        &self.referrer_id
    }

    /// Co-signer keys; element 0 equals the account key when non-empty.
    pub fn multi_sig(&self) -> &[CompressedKey] {
        &self.multi_sig
    }

    /// Detached signature over the referral.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Flat human-readable field map for explorers and logs.
    ///
    /// `multiSig` is present only when the record carries co-signers.
    pub fn to_json(&self) -> Value {
        let mut fields = json!({
            "publicKey": self.public_key.to_hex(),
            "referrer": self.referrer_id.to_hex(),
            "signature": self.signature.to_json(),
        });
        if !self.multi_sig.is_empty() {
            fields["multiSig"] = Value::Array(
                self.multi_sig
                    .iter()
                    .map(|key| Value::String(key.to_hex()))
                    .collect(),
            );
        }
        fields
    }
}
