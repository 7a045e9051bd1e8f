//! Account entity and its sanitized projection.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A registered account.
///
/// The `password` field holds the Argon2 verifier string, never the
/// plaintext. It must not leave the process; callers get [`AccountInfo`].
#[derive(Debug, Clone)]
pub struct Account {
    /// Store-assigned unique ID.
    pub id: Uuid,
    /// Login username (unique, case-insensitive).
    pub username: String,
    /// Email address (unique, stored lowercase).
    pub email: String,
    /// Password verifier (Argon2 PHC string).
    pub password: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Gender as stated on the application.
    pub gender: String,
    /// Residential address.
    pub address: String,
    /// Account creation timestamp (store-assigned).
    pub created_at: DateTime<Utc>,
    /// Last update timestamp (store-assigned).
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Sanitized projection of this account for response payloads.
    pub fn info(&self) -> AccountInfo {
        AccountInfo {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            date_of_birth: self.date_of_birth,
            gender: self.gender.clone(),
            address: self.address.clone(),
            created_at: self.created_at,
        }
    }
}

/// Account data safe to return to callers (no verifier).
#[derive(Debug, Clone, Serialize)]
pub struct AccountInfo {
    /// Account ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Gender.
    pub gender: String,
    /// Residential address.
    pub address: String,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new account.
///
/// `password` must already be hashed; the store never sees plaintext.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Login username.
    pub username: String,
    /// Email address (lowercase).
    pub email: String,
    /// Password verifier (pre-hashed).
    pub password: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Gender.
    pub gender: String,
    /// Residential address.
    pub address: String,
}
