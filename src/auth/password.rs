use std::sync::OnceLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::AppError;

// Verified against when the account does not exist, so unknown usernames
// cost the same as wrong passwords.
static PLACEHOLDER_HASH: OnceLock<String> = OnceLock::new();

// Argon2id defaults: 19 MiB, 2 passes, 1 lane.
fn hash_sync(plain: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| format!("Hashing failed: {e}"))
}

// Parameters come from the PHC string, so hashes made with other costs
// still verify.
fn verify_sync(plain: &str, stored: &str) -> Result<bool, String> {
    let parsed = PasswordHash::new(stored).map_err(|e| format!("Invalid hash: {e}"))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

fn placeholder_hash() -> Result<&'static str, String> {
    if let Some(hash) = PLACEHOLDER_HASH.get() {
        return Ok(hash);
    }
    let hash = hash_sync("telecall-placeholder")?;
    Ok(PLACEHOLDER_HASH.get_or_init(|| hash))
}

/// Salted Argon2id hash of `plain`, computed on the blocking pool.
pub async fn hash(plain: &str) -> Result<String, AppError> {
    let plain = plain.to_string();
    tokio::task::spawn_blocking(move || hash_sync(&plain))
        .await?
        .map_err(AppError::Internal)
}

/// Compare `plain` against a stored hash on the blocking pool.
pub async fn verify(plain: &str, stored: &str) -> Result<bool, AppError> {
    let plain = plain.to_string();
    let stored = stored.to_string();
    tokio::task::spawn_blocking(move || verify_sync(&plain, &stored))
        .await?
        .map_err(AppError::Internal)
}

/// Spend one verification on a throwaway hash. Always false.
pub async fn verify_unknown(plain: &str) -> Result<bool, AppError> {
    let plain = plain.to_string();
    tokio::task::spawn_blocking(move || {
        let stored = placeholder_hash()?;
        verify_sync(&plain, stored).map(|_| false)
    })
    .await?
    .map_err(AppError::Internal)
}

/// Build the placeholder hash ahead of the first login.
pub async fn warm_up() -> Result<(), AppError> {
    tokio::task::spawn_blocking(|| placeholder_hash().map(|_| ()))
        .await?
        .map_err(AppError::Internal)
}
