//! PoA Account-Registration Transaction Codec
//!

pub mod account;
pub mod cli;
pub mod cursor;
pub mod errors;
pub mod flags;
pub mod keys;
pub mod register;
