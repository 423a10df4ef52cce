//! Password digesting for the credential store.
//!
//! Passwords are stored as an unsalted SHA-256 hex digest and compared by
//! exact match. The 4-character minimum mirrors the original application
//! and is intentionally weak; tightening it would break existing accounts.

use sha2::{Digest, Sha256};

/// Minimum password length, counted in code points.
pub const MIN_PASSWORD_LEN: usize = 4;

/// Lowercase hex SHA-256 digest of a password.
pub fn digest_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Exact-match check of a password against a stored digest.
pub fn verify_password(password: &str, stored_digest: &str) -> bool {
    digest_password(password) == stored_digest
}
