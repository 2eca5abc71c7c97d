//! Shared fixtures for the codec integration tests.

use poa_register_tx::account::{AccountId, CHAIN_MASTER_SIGNATORIES};
use poa_register_tx::keys::{CompressedKey, Signature};
use poa_register_tx::register::RegisterTxBuilder;

/// Fixture key by index. These are real compressed secp256k1 points (the
/// chain-master signatory set); index 0 doubles as the registrant key in
/// most tests.
pub fn key(i: usize) -> CompressedKey {
    CompressedKey::from_hex(CHAIN_MASTER_SIGNATORIES[i]).unwrap()
}

pub fn zero_signature() -> Signature {
    Signature::new([0u8; 32], [0u8; 32], 0)
}

pub fn referrer_id(byte: u8) -> AccountId {
    AccountId::from_bytes([byte; 20])
}

/// Serialize a record for registrant `key(0)` with the given number of
/// extra co-signers taken from `key(1)..`.
///
/// `co_signer_total` counts wire slots: 0 leaves the setter uncalled,
/// anything higher produces the self-entry plus `total - 1` extras.
pub fn encoded_record(co_signer_total: usize) -> Vec<u8> {
    let mut builder = RegisterTxBuilder::new();
    builder.set_registrant(key(0));
    builder.set_referrer_id(referrer_id(0x42), Signature::new([0x11; 32], [0x22; 32], 1));
    if co_signer_total > 0 {
        let extras: Vec<CompressedKey> = (1..co_signer_total).map(key).collect();
        builder.set_co_signers(&extras).unwrap();
    }
    builder.serialize().unwrap()
}
