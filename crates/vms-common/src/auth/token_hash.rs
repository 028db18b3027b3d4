//! Refresh token hashing
//!
//! Refresh tokens are stored and looked up as hex SHA-256 digests; the raw
//! token never reaches the database.

use sha2::{Digest, Sha256};

/// Hash a token to its hex-encoded SHA-256 digest
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
