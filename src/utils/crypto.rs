//! Cryptographic utilities

use sha2::{Digest, Sha256};

/// Hash a string using SHA-256
pub fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

/// Verify a presented secret against a stored SHA-256 hex digest
///
/// Compares the digests without short-circuiting on the first differing byte.
pub fn verify_hash(input: &str, hash: &str) -> bool {
    let candidate = hash_string(input);
    if candidate.len() != hash.len() {
        return false;
    }

    candidate
        .bytes()
        .zip(hash.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
