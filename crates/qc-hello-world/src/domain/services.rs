//! # Domain Services
//!
//! Pure hashing helpers. Deterministic, no side effects.

use sha3::{Digest, Keccak256};

/// Keccak-256 of `data`.
#[must_use]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let hash = Keccak256::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hash);
    out
}

/// Four-byte function selector: `keccak256(signature)[..4]`.
///
/// `signature` is the canonical form, e.g. `"setGreeting(string)"`.
#[must_use]
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}
