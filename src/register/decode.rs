//! Wire decoding of registration records.

use crate::account::{AccountId, ACCOUNT_ID_LEN};
use crate::cursor::{ByteCursor, CursorError};
use crate::keys::{CompressedKey, Signature, COMPRESSED_KEY_LEN};
use crate::register::multisig::{MultiSigError, MultiSigValidator, MAX_MULTISIG_KEYS};
use crate::register::RegisterTx;
use thiserror::Error;
use tracing::debug;

/// Structural decode failures.
///
/// Every variant is terminal for the buffer it came from: decoding is pure
/// and deterministic, so an invalid buffer can never become valid on retry,
/// and no partial record is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("no data")]
    NoData,

    #[error("public key decode error")]
    RegistrantKey,

    #[error("too many co-signers")]
    TooManyCoSigners,

    #[error("co-signer {0} decode error")]
    CoSignerKey(usize),

    #[error("first co-signer must equal account key")]
    FirstCoSignerMismatch,

    #[error("duplicate co-signer at {0}")]
    DuplicateCoSigner(usize),

    #[error("signature decode error")]
    Signature,

    #[error("unexpected trailing bytes: {0} left over")]
    TrailingBytes(usize),

    #[error(transparent)]
    Underflow(#[from] CursorError),
}

impl From<MultiSigError> for DecodeError {
    fn from(err: MultiSigError) -> Self {
        match err {
            MultiSigError::TooManyKeys(_) => DecodeError::TooManyCoSigners,
            MultiSigError::FirstKeyMismatch => DecodeError::FirstCoSignerMismatch,
            MultiSigError::DuplicateKey(index) => DecodeError::DuplicateCoSigner(index),
        }
    }
}

impl RegisterTx {
    /// Decode and validate a registration record.
    ///
    /// Steps run in strict wire order and fail fast; the first violated
    /// invariant rejects the whole buffer.
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        if data.is_empty() {
            return Err(DecodeError::NoData);
        }
        let mut cursor = ByteCursor::new(data);

        // Registrant public key
        let public_key =
            CompressedKey::from_bytes(cursor.next(COMPRESSED_KEY_LEN)?).map_err(|e| {
                debug!(error = %e, "registrant key rejected");
                DecodeError::RegistrantKey
            })?;

        // Referrer identifier, opaque at this layer
        let referrer_id = AccountId::from_bytes(cursor.take_array::<ACCOUNT_ID_LEN>()?);

        // Co-signer list; the count bound is checked before any key bytes
        // are read
        let count = cursor.take_u8()? as usize;
        if count > MAX_MULTISIG_KEYS {
            debug!(count, "co-signer count over bound");
            return Err(DecodeError::TooManyCoSigners);
        }
        let mut validator = MultiSigValidator::new(public_key);
        let mut multi_sig = Vec::with_capacity(count);
        for index in 0..count {
            let key = CompressedKey::from_bytes(cursor.next(COMPRESSED_KEY_LEN)?).map_err(|e| {
                debug!(index, error = %e, "co-signer key rejected");
                DecodeError::CoSignerKey(index)
            })?;
            validator.accept(index, &key)?;
            multi_sig.push(key);
        }

        // Detached signature; any underflow here is a signature error
        let r = cursor
            .take_array::<32>()
            .map_err(|_| DecodeError::Signature)?;
        let s = cursor
            .take_array::<32>()
            .map_err(|_| DecodeError::Signature)?;
        let v = cursor.take_u8().map_err(|_| DecodeError::Signature)?;
        let signature = Signature::new(r, s, v);

        if cursor.remaining() > 0 {
            return Err(DecodeError::TrailingBytes(cursor.remaining()));
        }

        Ok(RegisterTx {
            public_key,
            referrer_id,
            multi_sig,
            signature,
        })
    }
}
