//! Construction and canonical serialization of registration records.

use crate::account::{AccountId, ChainAccount, ACCOUNT_ID_LEN};
use crate::keys::{CompressedKey, Signature, COMPRESSED_KEY_LEN};
use crate::register::multisig::MAX_MULTISIG_KEYS;
use thiserror::Error;

/// Caller supplied an invalid field while populating the builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError {
    #[error("too many co-signer keys")]
    TooManyCoSigners,
}

/// A required field was missing at serialization time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("registrant public key is not set")]
    MissingRegistrantKey,

    #[error("no referrer defined")]
    MissingReferrer,

    #[error("registrant signature not set")]
    MissingSignature,
}

/// Field-by-field builder for a registration record.
///
/// Populate, then [`serialize`](Self::serialize). Serialization borrows the
/// builder and is idempotent: the same fully populated state always yields
/// byte-identical output.
#[derive(Debug, Default)]
pub struct RegisterTxBuilder {
    public_key: Option<CompressedKey>,
    referrer_id: Option<AccountId>,
    signature: Option<Signature>,
    multi_sig: Option<Vec<CompressedKey>>,
}

impl RegisterTxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the account being registered.
    pub fn set_registrant(&mut self, key: CompressedKey) -> &mut Self {
        self.public_key = Some(key);
        self
    }

    /// Sponsoring account plus the registrant's signature over the
    /// referral. The two are set together: the signature is bound to the
    /// referral act.
    pub fn set_referrer(
        &mut self,
        referrer: &dyn ChainAccount,
        signature: Signature,
    ) -> &mut Self {
        self.set_referrer_id(referrer.account_identifier(), signature)
    }

    /// Raw variant of [`set_referrer`](Self::set_referrer) for callers that
    /// hold only the 20-byte identifier.
    pub fn set_referrer_id(&mut self, referrer_id: AccountId, signature: Signature) -> &mut Self {
        self.referrer_id = Some(referrer_id);
        self.signature = Some(signature);
        self
    }

    /// Additional co-signer keys beyond the mandatory self-entry.
    ///
    /// The account key occupies slot 0 automatically, so at most
    /// `MAX_MULTISIG_KEYS - 1` keys may be passed. Calling this with an
    /// empty slice still emits the self-entry (count 1 on the wire);
    /// leaving it uncalled emits count 0.
    pub fn set_co_signers(
        &mut self,
        keys: &[CompressedKey],
    ) -> Result<&mut Self, ConstructError> {
        if keys.len() > MAX_MULTISIG_KEYS - 1 {
            return Err(ConstructError::TooManyCoSigners);
        }
        self.multi_sig = Some(keys.to_vec());
        Ok(self)
    }

    /// Serialize to the canonical wire form.
    pub fn serialize(&self) -> Result<Vec<u8>, EncodeError> {
        let public_key = self.public_key.ok_or(EncodeError::MissingRegistrantKey)?;
        let referrer_id = self.referrer_id.ok_or(EncodeError::MissingReferrer)?;
        let signature = self.signature.ok_or(EncodeError::MissingSignature)?;

        let co_signers = self.multi_sig.as_deref();
        let slots = co_signers.map_or(0, |extra| extra.len() + 1);
        let mut data =
            Vec::with_capacity(COMPRESSED_KEY_LEN * (1 + slots) + ACCOUNT_ID_LEN + 1 + 65);

        append_key_padded(&mut data, &public_key);
        data.extend_from_slice(referrer_id.as_bytes());

        data.push(slots as u8);
        if let Some(extra) = co_signers {
            append_key_padded(&mut data, &public_key);
            for key in extra {
                append_key_padded(&mut data, key);
            }
        }

        data.extend_from_slice(signature.r());
        data.extend_from_slice(signature.s());
        data.push(signature.v());
        Ok(data)
    }
}

/// Append a key left-zero-padded to the fixed wire width.
///
/// Compressed keys always serialize to exactly 33 bytes, so the padding is
/// a no-op kept as a width invariant on the record layout.
fn append_key_padded(data: &mut Vec<u8>, key: &CompressedKey) {
    let bytes = key.serialize();
    data.resize(data.len() + (COMPRESSED_KEY_LEN - bytes.len()), 0);
    data.extend_from_slice(&bytes);
}
