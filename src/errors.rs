//! Crate-wide error type - single point of truth

use thiserror::Error;

/// Umbrella error for every codec operation.
#[derive(Debug, Error)]
pub enum TxError {
    /// Structural decode rejection
    #[error("decode error: {0}")]
    Decode(#[from] crate::register::DecodeError),

    /// Builder populated with invalid fields
    #[error("construct error: {0}")]
    Construct(#[from] crate::register::ConstructError),

    /// Serialization attempted with required fields missing
    #[error("encode error: {0}")]
    Encode(#[from] crate::register::EncodeError),

    /// Key decode outside a wire record
    #[error("key error: {0}")]
    Key(#[from] crate::keys::KeyError),

    /// Flag registry lookups
    #[error("flag error: {0}")]
    Flag(#[from] crate::flags::FlagError),
}

/// Crate-wide result type.
pub type TxResult<T> = Result<T, TxError>;
