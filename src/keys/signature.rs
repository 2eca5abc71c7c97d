//! Detached registration signature.

use serde_json::{json, Value};

/// Detached ECDSA signature over a referral, wire form `r || s || v`.
///
/// The components are opaque at this layer; verification happens in the
/// consensus engine against the recovered key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    r: [u8; 32],
    s: [u8; 32],
    v: u8,
}

impl Signature {
    pub fn new(r: [u8; 32], s: [u8; 32], v: u8) -> Self {
        Self { r, s, v }
    }

    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// Recovery id disambiguating which candidate key the signature
    /// recovers to.
    pub fn v(&self) -> u8 {
        self.v
    }

    /// Human-readable `{r, s, v}` map.
    pub fn to_json(&self) -> Value {
        json!({
            "r": hex::encode(self.r),
            "s": hex::encode(self.s),
            "v": self.v,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_form_is_hex_with_numeric_v() {
        let sig = Signature::new([0x11; 32], [0x22; 32], 1);
        let json = sig.to_json();
        assert_eq!(json["r"].as_str().unwrap(), "11".repeat(32));
        assert_eq!(json["s"].as_str().unwrap(), "22".repeat(32));
        assert_eq!(json["v"].as_u64().unwrap(), 1);
    }
}
