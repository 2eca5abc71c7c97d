//! Transaction-type and ledger-entry flags.
//!
//! The registry is thin by design: it maps numbers to names and, where this
//! crate implements one, a decode constructor. Dispatching decoded
//! transactions into ledger effects is the engine's job, not this crate's.

use crate::register::{DecodeError, RegisterTx};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Genesis/chain-initializer transaction.
pub const TX_FLAG_GENESIS: u16 = 0x01;
/// Account upgrade op (chain master only).
pub const TX_FLAG_ACCOUNT_UPGRADE: u16 = 0x11;
/// Account registration transaction.
pub const TX_FLAG_REGISTER: u16 = 0x64;
/// Account-to-account transfer op.
pub const TX_FLAG_TRANSFER: u16 = 0xc8;
/// Create a new asset.
pub const TX_FLAG_ASSET_CREATE: u16 = 1101;
/// Pause an asset (asset owner only).
pub const TX_FLAG_ASSET_PAUSE: u16 = 1102;
/// Disable an asset (chain master only).
pub const TX_FLAG_ASSET_DISABLE: u16 = 1103;

/// Ledger receipt flags.
pub mod ledger {
    /// Initial supply as per genesis.
    pub const TX_RECEIPT_G_INIT_SUPPLY: u16 = 0x01;
    /// Chain-master mint op.
    pub const TX_RECEIPT_MINT: u16 = 0x02;
    /// Fee deduction per byte.
    pub const TX_RECEIPT_DEBIT_FEE: u16 = 0x64;
}

/// Decode constructor for a flag's wire payload.
pub type DecodeFn = fn(&[u8]) -> Result<RegisterTx, DecodeError>;

/// Registry lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    #[error("unknown transaction flag: {0:#06x}")]
    UnknownFlag(u16),

    #[error("unknown transaction flag name: {0}")]
    UnknownName(String),

    #[error("transaction flag {0:#06x} already registered")]
    DuplicateFlag(u16),
}

/// A registered transaction flag.
#[derive(Debug, Clone, Serialize)]
pub struct TxFlag {
    pub flag: u16,
    pub name: &'static str,
    /// Wire-payload constructor, where this crate implements one.
    #[serde(skip)]
    pub decode: Option<DecodeFn>,
}

/// Ordered flag table.
#[derive(Debug, Default)]
pub struct TxFlagRegistry {
    entries: BTreeMap<u16, TxFlag>,
}

impl TxFlagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the protocol's fixed flag set. Only
    /// REGISTER carries a constructor here.
    pub fn with_protocol_flags() -> Self {
        let mut registry = Self::new();
        let flags: [(u16, &'static str, Option<DecodeFn>); 7] = [
            (TX_FLAG_GENESIS, "genesis", None),
            (TX_FLAG_ACCOUNT_UPGRADE, "accountUpgrade", None),
            (TX_FLAG_REGISTER, "register", Some(RegisterTx::decode)),
            (TX_FLAG_TRANSFER, "transfer", None),
            (TX_FLAG_ASSET_CREATE, "assetCreate", None),
            (TX_FLAG_ASSET_PAUSE, "assetPause", None),
            (TX_FLAG_ASSET_DISABLE, "assetDisable", None),
        ];
        for (flag, name, decode) in flags {
            registry.entries.insert(flag, TxFlag { flag, name, decode });
        }
        registry
    }

    /// Register a flag; re-registering an existing number is an error.
    pub fn register(
        &mut self,
        flag: u16,
        name: &'static str,
        decode: Option<DecodeFn>,
    ) -> Result<(), FlagError> {
        if self.entries.contains_key(&flag) {
            return Err(FlagError::DuplicateFlag(flag));
        }
        self.entries.insert(flag, TxFlag { flag, name, decode });
        Ok(())
    }

    /// Lookup by numeric flag.
    pub fn get(&self, flag: u16) -> Result<&TxFlag, FlagError> {
        self.entries.get(&flag).ok_or(FlagError::UnknownFlag(flag))
    }

    /// Lookup by registered name.
    pub fn get_with_name(&self, name: &str) -> Result<&TxFlag, FlagError> {
        self.entries
            .values()
            .find(|entry| entry.name == name)
            .ok_or_else(|| FlagError::UnknownName(name.to_string()))
    }

    /// All registered flags in ascending numeric order.
    pub fn all(&self) -> impl Iterator<Item = &TxFlag> {
        self.entries.values()
    }
}
