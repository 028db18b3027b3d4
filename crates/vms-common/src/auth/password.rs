//! Password hashing with Argon2id.
//!
//! Hashes are stored in PHC string format, so parameters and salt travel
//! with the hash and can be upgraded without a migration.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Minimum accepted password length
const MIN_PASSWORD_LEN: usize = 8;

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))?;

    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC hash.
///
/// Returns `Ok(false)` on mismatch; `Err` only when the stored hash itself
/// cannot be parsed.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Enforce the registration password policy.
///
/// Requires at least [`MIN_PASSWORD_LEN`] characters with an uppercase
/// letter, a lowercase letter, and a digit.
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    let rule_violation = if password.len() < MIN_PASSWORD_LEN {
        Some("Password must be at least 8 characters long")
    } else if !password.chars().any(char::is_uppercase) {
        Some("Password must contain at least one uppercase letter")
    } else if !password.chars().any(char::is_lowercase) {
        Some("Password must contain at least one lowercase letter")
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Some("Password must contain at least one digit")
    } else {
        None
    };

    match rule_violation {
        Some(msg) => Err(AppError::Validation(msg.to_string())),
        None => Ok(()),
    }
}
