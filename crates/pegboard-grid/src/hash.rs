//! Digest helpers for grid regression checks.
//!
//! Uses SHA-256 so a digest recorded in a test stays stable across
//! platforms and releases. Only the raw cell bytes are hashed: width,
//! height and line terminators are not part of the digest.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `bytes` (64 characters).
pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
