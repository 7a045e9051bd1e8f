//! sevapass - account and session service for a passport application portal.
//!
//! Owns the credential lifecycle: registration, password login, signed
//! session tokens, and authenticated password rotation. Persistence sits
//! behind the [`account::AccountStore`] trait; the HTTP layer in [`web`] is
//! thin glue over the flows in [`auth`].

pub mod account;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod web;

pub use account::{
    Account, AccountInfo, AccountStore, MemoryAccountStore, NewAccount, SharedStore, StoreError,
};
pub use auth::{
    change_password, hash_password, login, register, verify_password, AuthError, AuthOutcome,
    ChangePasswordRequest, Claims, LoginRequest, PasswordError, RegistrationRequest, TokenError,
    TokenIssuer, ValidationError,
};
pub use config::Config;
pub use error::{Result, SevapassError};
pub use web::WebServer;
