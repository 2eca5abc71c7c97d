//! Chain accounts and the fixed proof-of-authority master account.

use crate::keys::{CompressedKey, KeyError};
use bitcoin::hashes::{hash160, Hash};
use lazy_static::lazy_static;
use std::fmt;

/// Wire width of an account identifier.
pub const ACCOUNT_ID_LEN: usize = 20;

/// 20-byte account identifier: HASH160 (SHA-256 then RIPEMD-160) of the
/// account's compressed public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId([u8; ACCOUNT_ID_LEN]);

impl AccountId {
    pub fn from_bytes(bytes: [u8; ACCOUNT_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Derive the identifier from a compressed public key.
    pub fn from_key(key: &CompressedKey) -> Self {
        Self(hash160::Hash::hash(&key.serialize()).to_byte_array())
    }

    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ID_LEN] {
        &self.0
    }

    /// `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Narrow account capability surface consumed by the codec.
///
/// Anything that can stand on the referrer side of a registration
/// implements this; the codec never looks past these four operations.
pub trait ChainAccount {
    /// The account's compressed public key.
    fn public_key(&self) -> &CompressedKey;

    /// 20-byte identifier used on the wire to reference this account.
    fn account_identifier(&self) -> AccountId;

    /// Whether the account holds block-production rights.
    fn can_forge_blocks(&self) -> bool;

    /// Supply credited to the account at genesis, zero for ordinary
    /// accounts.
    fn initial_supply(&self) -> u64;
}

/// Chain-master account public key (compressed, hex).
pub const CHAIN_MASTER_KEY: &str =
    "03053c689577b88cfc61279963e17d83025028b400b38ccaa0b14536733205566b";

/// Chain-master signatory keys in signing order. Signatory 1 is the account
/// key itself.
pub const CHAIN_MASTER_SIGNATORIES: [&str; 5] = [
    "03053c689577b88cfc61279963e17d83025028b400b38ccaa0b14536733205566b",
    "03a41332c77db97752251c013e34400e93e88a65cba09c4cc67bc01a59598775f9",
    "0201c8a43bf301da7be4c3e71d7914a3af2c31911e3a86a3026f45b07063170569",
    "036b61e1a693d0a2892a02d1acb637a13a9d77badf936648688bcd2e5bb1c366e0",
    "0213f57c39a0abc589134ac5bf16225168a2b76de267a896f9a70b2571c5534dd8",
];

/// Initial supply credited to the chain master at genesis
/// (100,000,000 units at 8 decimal places).
pub const CHAIN_MASTER_INITIAL_SUPPLY: u64 = 10_000_000_000_000_000;

/// The fixed proof-of-authority master account.
///
/// The whole key table is resolved once at construction; lookups after that
/// never touch the key decoder.
#[derive(Debug)]
pub struct ChainMaster {
    public_key: CompressedKey,
    signatories: [CompressedKey; 5],
}

impl ChainMaster {
    /// Resolve the constant key table.
    pub fn new() -> Result<Self, KeyError> {
        Ok(Self {
            public_key: CompressedKey::from_hex(CHAIN_MASTER_KEY)?,
            signatories: [
                CompressedKey::from_hex(CHAIN_MASTER_SIGNATORIES[0])?,
                CompressedKey::from_hex(CHAIN_MASTER_SIGNATORIES[1])?,
                CompressedKey::from_hex(CHAIN_MASTER_SIGNATORIES[2])?,
                CompressedKey::from_hex(CHAIN_MASTER_SIGNATORIES[3])?,
                CompressedKey::from_hex(CHAIN_MASTER_SIGNATORIES[4])?,
            ],
        })
    }

    /// Signatory by 1-based index, `None` outside 1..=5.
    pub fn signatory(&self, num: usize) -> Option<&CompressedKey> {
        if (1..=self.signatories.len()).contains(&num) {
            Some(&self.signatories[num - 1])
        } else {
            None
        }
    }

    /// All five signatory keys in signing order.
    pub fn all_public_keys(&self) -> &[CompressedKey; 5] {
        &self.signatories
    }
}

impl ChainAccount for ChainMaster {
    fn public_key(&self) -> &CompressedKey {
        &self.public_key
    }

    fn account_identifier(&self) -> AccountId {
        AccountId::from_key(&self.public_key)
    }

    fn can_forge_blocks(&self) -> bool {
        true
    }

    fn initial_supply(&self) -> u64 {
        CHAIN_MASTER_INITIAL_SUPPLY
    }
}

lazy_static! {
    static ref CHAIN_MASTER: ChainMaster =
        ChainMaster::new().expect("chain-master key constants are valid compressed points");
}

/// Process-wide chain-master instance, resolved on first use.
pub fn chain_master() -> &'static ChainMaster {
    &CHAIN_MASTER
}
