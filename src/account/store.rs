//! Persistence contract for accounts.
//!
//! The flows only ever talk to [`AccountStore`]; any backend that can do a
//! keyed lookup, an atomically-unique create, and a save can sit behind it.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use super::{Account, NewAccount};

/// Storage-layer errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A unique constraint (email or username) was violated.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// The backend failed or is unreachable.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Trait for account persistence operations.
///
/// `create` must enforce email and username uniqueness atomically; the
/// flows' own pre-checks are advisory and racy on their own.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Find an account by email (lowercase comparison).
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// Find an account by username (case-insensitive).
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, StoreError>;

    /// Find an account by ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError>;

    /// Create a new account.
    ///
    /// Fails with [`StoreError::DuplicateKey`] if the email or username is
    /// already taken.
    async fn create(&self, new_account: &NewAccount) -> Result<Account, StoreError>;

    /// Persist changes to an existing account.
    async fn save(&self, account: &Account) -> Result<(), StoreError>;
}

/// Shared handle to an account store.
pub type SharedStore = Arc<dyn AccountStore>;
