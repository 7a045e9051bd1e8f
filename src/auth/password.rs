//! Password hashing and verification for sevapass.
//!
//! Uses Argon2id. Hashing is deliberately expensive, so the async wrappers
//! push the work onto the blocking pool instead of the request loop.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params,
};
use rand_core::OsRng;
use thiserror::Error;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Password hashing errors.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Password is too short.
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    TooShort,

    /// Password is too long.
    #[error("password must be at most {MAX_PASSWORD_LENGTH} characters")]
    TooLong,

    /// Password hashing failed (unrecoverable crypto fault).
    #[error("password hashing failed: {0}")]
    HashError(String),
}

/// Create the Argon2 hasher with recommended parameters.
///
/// Parameters:
/// - Memory cost: 64 MB (65536 KiB)
/// - Time cost: 3 iterations
/// - Parallelism: 4 threads
fn create_argon2() -> Argon2<'static> {
    let m_cost = 65536;
    let t_cost = 3;
    let p_cost = 4;

    let params = Params::new(m_cost, t_cost, p_cost, None).expect("valid Argon2 params");
    Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
}

/// Hash a password using Argon2id.
///
/// Returns a PHC-formatted verifier string embedding a per-call random salt
/// and the work-factor parameters.
///
/// # Examples
///
/// ```
/// use sevapass::hash_password;
///
/// let verifier = hash_password("my_secure_password").unwrap();
/// assert!(verifier.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    validate_password_length(password)?;

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = create_argon2();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored verifier.
///
/// Re-derives with the salt and parameters embedded in the verifier and
/// compares in constant time. Returns `false` for any mismatch or for a
/// malformed verifier; a wrong password is never an error.
///
/// # Examples
///
/// ```
/// use sevapass::{hash_password, verify_password};
///
/// let verifier = hash_password("my_secure_password").unwrap();
/// assert!(verify_password("my_secure_password", &verifier));
/// assert!(!verify_password("wrong_password", &verifier));
/// ```
pub fn verify_password(password: &str, verifier: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(verifier) else {
        return false;
    };
    // Parameters come from the parsed verifier, not from create_argon2().
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Validate password length requirements.
pub fn validate_password_length(password: &str) -> Result<(), PasswordError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort);
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(PasswordError::TooLong);
    }
    Ok(())
}

/// Hash a password on the blocking pool.
pub async fn hash_password_blocking(password: String) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| PasswordError::HashError(format!("hashing task failed: {e}")))?
}

/// Verify a password on the blocking pool.
pub async fn verify_password_blocking(password: String, verifier: String) -> bool {
    tokio::task::spawn_blocking(move || verify_password(&password, &verifier))
        .await
        .unwrap_or(false)
}
