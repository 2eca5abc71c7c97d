//! Co-signer rules shared by decoding and construction.
//!
//! Both paths must reject the same lists for the same reasons, so the rules
//! live here: signer-count bound, first-signer identity, duplicate
//! detection.

use crate::keys::CompressedKey;
use std::collections::HashSet;
use thiserror::Error;

/// Maximum co-signer slots on a registration, including the mandatory
/// self-entry.
pub const MAX_MULTISIG_KEYS: usize = 5;

/// Violations of the co-signer rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MultiSigError {
    #[error("cannot have more than {MAX_MULTISIG_KEYS} co-signer keys, got {0}")]
    TooManyKeys(usize),

    #[error("first co-signer must equal account key")]
    FirstKeyMismatch,

    #[error("duplicate co-signer at index {0}")]
    DuplicateKey(usize),
}

/// Incremental co-signer rule checker.
///
/// Candidates are fed one at a time so a decoder can report the first
/// violated rule at the exact index it occurs, before later bytes are even
/// read. Duplicate detection compares the lowercase hex of the canonical
/// compressed form, never reference identity.
#[derive(Debug)]
pub struct MultiSigValidator {
    account_key: CompressedKey,
    seen: HashSet<String>,
    accepted: usize,
}

impl MultiSigValidator {
    pub fn new(account_key: CompressedKey) -> Self {
        Self {
            account_key,
            seen: HashSet::new(),
            accepted: 0,
        }
    }

    /// Check a declared total against the bound before any key is examined.
    pub fn check_count(count: usize) -> Result<(), MultiSigError> {
        if count > MAX_MULTISIG_KEYS {
            return Err(MultiSigError::TooManyKeys(count));
        }
        Ok(())
    }

    /// Apply the rules to the candidate at `index`.
    pub fn accept(&mut self, index: usize, key: &CompressedKey) -> Result<(), MultiSigError> {
        if self.accepted >= MAX_MULTISIG_KEYS {
            return Err(MultiSigError::TooManyKeys(self.accepted + 1));
        }
        if index == 0 && *key != self.account_key {
            return Err(MultiSigError::FirstKeyMismatch);
        }
        if !self.seen.insert(key.to_hex()) {
            return Err(MultiSigError::DuplicateKey(index));
        }
        self.accepted += 1;
        Ok(())
    }

    /// Keys accepted so far.
    pub fn accepted(&self) -> usize {
        self.accepted
    }
}

/// One-shot validation of a full candidate list.
///
/// Pure and deterministic; returns the validated ordered keys or the first
/// violated rule.
pub fn validate(
    account_key: &CompressedKey,
    candidates: &[CompressedKey],
) -> Result<Vec<CompressedKey>, MultiSigError> {
    MultiSigValidator::check_count(candidates.len())?;
    let mut validator = MultiSigValidator::new(*account_key);
    for (index, key) in candidates.iter().enumerate() {
        validator.accept(index, key)?;
    }
    Ok(candidates.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::CHAIN_MASTER_SIGNATORIES;

    fn key(i: usize) -> CompressedKey {
        CompressedKey::from_hex(CHAIN_MASTER_SIGNATORIES[i]).unwrap()
    }

    #[test]
    fn accepts_ordered_list_led_by_account_key() {
        let keys = [key(0), key(1), key(2), key(3), key(4)];
        let validated = validate(&key(0), &keys).unwrap();
        assert_eq!(validated, keys.to_vec());
    }

    #[test]
    fn empty_list_is_valid() {
        assert_eq!(validate(&key(0), &[]).unwrap(), Vec::new());
    }

    #[test]
    fn count_bound_fires_before_key_inspection() {
        assert_eq!(
            MultiSigValidator::check_count(6),
            Err(MultiSigError::TooManyKeys(6))
        );
        assert!(MultiSigValidator::check_count(5).is_ok());
    }

    #[test]
    fn first_key_must_match_account() {
        let err = validate(&key(0), &[key(1)]).unwrap_err();
        assert_eq!(err, MultiSigError::FirstKeyMismatch);
    }

    #[test]
    fn duplicates_rejected_at_their_index() {
        let err = validate(&key(0), &[key(0), key(1), key(1)]).unwrap_err();
        assert_eq!(err, MultiSigError::DuplicateKey(2));
    }

    #[test]
    fn duplicate_of_account_key_itself_is_rejected() {
        let err = validate(&key(0), &[key(0), key(0)]).unwrap_err();
        assert_eq!(err, MultiSigError::DuplicateKey(1));
    }
}
