//! In-memory account store.
//!
//! The reference backend used by tests and development setups, in the same
//! spirit as an in-memory database. Uniqueness is enforced atomically by
//! doing the duplicate check and the insert under one write lock.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Account, AccountStore, NewAccount, StoreError};

/// Account store backed by a process-local map.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<Uuid, Account>>,
}

impl MemoryAccountStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.username.eq_ignore_ascii_case(username))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn create(&self, new_account: &NewAccount) -> Result<Account, StoreError> {
        let mut accounts = self.accounts.write().await;

        if accounts
            .values()
            .any(|a| a.email.eq_ignore_ascii_case(&new_account.email))
        {
            return Err(StoreError::DuplicateKey("email".to_string()));
        }
        if accounts
            .values()
            .any(|a| a.username.eq_ignore_ascii_case(&new_account.username))
        {
            return Err(StoreError::DuplicateKey("username".to_string()));
        }

        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            username: new_account.username.clone(),
            email: new_account.email.clone(),
            password: new_account.password.clone(),
            phone_number: new_account.phone_number.clone(),
            date_of_birth: new_account.date_of_birth,
            gender: new_account.gender.clone(),
            address: new_account.address.clone(),
            created_at: now,
            updated_at: now,
        };
        accounts.insert(account.id, account.clone());

        Ok(account)
    }

    async fn save(&self, account: &Account) -> Result<(), StoreError> {
        let mut accounts = self.accounts.write().await;
        let mut updated = account.clone();
        updated.updated_at = Utc::now();
        // created_at stays store-owned even if the caller mutated its copy.
        if let Some(existing) = accounts.get(&account.id) {
            updated.created_at = existing.created_at;
        }
        accounts.insert(updated.id, updated);
        Ok(())
    }
}
