//! Argon2id password hashing, verification, and strength validation.
//!
//! Hashes are stored in PHC string format so parameters and salt travel
//! with the hash.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC hash.
///
/// Returns `Ok(false)` on mismatch; `Err` only for a malformed hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Reject passwords shorter than `min_length` characters.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), String> {
    if password.chars().count() < min_length {
        return Err(format!(
            "Password must be at least {min_length} characters long"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wedsite_core::accounts::MIN_PASSWORD_LENGTH;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("amy-and-rory-forever").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("amy-and-rory-forever", &hash).unwrap());
        assert!(!verify_password("the-wrong-password", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn strength_counts_characters() {
        assert!(validate_password_strength("short", MIN_PASSWORD_LENGTH).is_err());
        assert!(validate_password_strength("twelve_chars", MIN_PASSWORD_LENGTH).is_ok());
        // Multi-byte characters count once each.
        assert!(validate_password_strength(&"é".repeat(11), MIN_PASSWORD_LENGTH).is_err());
        assert!(validate_password_strength(&"é".repeat(12), MIN_PASSWORD_LENGTH).is_ok());
    }
}
