use crate::auth::Error;
use bcrypt::{hash, verify};

/// bcrypt cost factor, roughly 250ms per hash
const HASH_COST: u32 = 12;

/// Hash a password with a fresh random salt.
///
/// # Errors
///
/// Returns an error if hashing fails.
pub fn hash_password(password: &str) -> Result<String, Error> {
    Ok(hash(password, HASH_COST)?)
}

/// Compare a plaintext password against a stored bcrypt hash.
///
/// # Errors
///
/// Returns an error if the stored hash cannot be parsed.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, Error> {
    Ok(verify(password, hashed)?)
}
