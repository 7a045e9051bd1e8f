//! Authentication module for sevapass.
//!
//! Owns secret handling (password hashing), identity issuance (signed
//! session tokens), and the three credential flows: registration, login,
//! and password change.

mod login;
mod password;
mod password_change;
mod registration;
mod token;
pub mod validation;

pub use login::{login, LoginRequest};
pub use password::{
    hash_password, hash_password_blocking, validate_password_length, verify_password,
    verify_password_blocking, PasswordError, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
pub use password_change::{change_password, ChangePasswordRequest};
pub use registration::{register, RegistrationRequest};
pub use token::{Claims, TokenError, TokenIssuer, DEFAULT_TOKEN_EXPIRY_SECS};
pub use validation::ValidationError;

use thiserror::Error;

use crate::account::{AccountInfo, StoreError};

/// Errors surfaced by the credential flows.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Input failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An account with the same email or username already exists.
    #[error("an account with that email or username already exists")]
    DuplicateAccount,

    /// No account for the given identifier.
    #[error("account not found")]
    AccountNotFound,

    /// Wrong credentials. Deliberately also covers unknown usernames on
    /// login so callers cannot enumerate accounts.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Token failed signature or structure checks.
    #[error("invalid token")]
    InvalidToken,

    /// Token is past its expiry.
    #[error("token expired")]
    ExpiredToken,

    /// Unrecoverable crypto fault.
    #[error("crypto failure: {0}")]
    Crypto(String),

    /// Storage fault.
    #[error("store error: {0}")]
    Store(String),
}

impl From<PasswordError> for AuthError {
    fn from(e: PasswordError) -> Self {
        match e {
            PasswordError::TooShort => AuthError::Validation(ValidationError::PasswordTooShort),
            PasswordError::TooLong => AuthError::Validation(ValidationError::PasswordTooLong),
            PasswordError::HashError(msg) => AuthError::Crypto(msg),
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Invalid => AuthError::InvalidToken,
            TokenError::Expired => AuthError::ExpiredToken,
            TokenError::Issue(msg) => AuthError::Crypto(msg),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateKey(_) => AuthError::DuplicateAccount,
            StoreError::Unavailable(msg) => AuthError::Store(msg),
        }
    }
}

/// Result of a successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// Signed session token.
    pub token: String,
    /// Sanitized account projection.
    pub account: AccountInfo,
}
