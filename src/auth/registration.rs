//! Account registration flow.

use chrono::NaiveDate;
use tracing::info;

use crate::account::{AccountStore, NewAccount, StoreError};
use crate::auth::validation::{
    validate_email, validate_password, validate_required, validate_username,
};
use crate::auth::{hash_password_blocking, AuthError, AuthOutcome, TokenIssuer};

/// Registration request data.
///
/// All fields are required; profile attributes are immutable after creation.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plaintext password (hashed before it reaches the store).
    pub password: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Gender as stated on the application.
    pub gender: String,
    /// Residential address.
    pub address: String,
}

/// Register a new account.
///
/// Validates the input, rejects duplicate identities, hashes the password on
/// the blocking pool, persists the account, and issues a session token.
///
/// The advisory duplicate lookups close the common case early; the store's
/// own unique constraint is what actually decides a race between two
/// concurrent registrations, and its `DuplicateKey` comes back as
/// [`AuthError::DuplicateAccount`] rather than a generic failure. On any
/// failure path no account record is written.
pub async fn register(
    store: &dyn AccountStore,
    issuer: &TokenIssuer,
    request: RegistrationRequest,
) -> Result<AuthOutcome, AuthError> {
    // 1. Validate all fields
    validate_username(&request.username)?;
    validate_email(&request.email)?;
    validate_password(&request.password)?;
    validate_required("phone_number", &request.phone_number)?;
    validate_required("gender", &request.gender)?;
    validate_required("address", &request.address)?;

    let email = request.email.trim().to_lowercase();

    // 2. Advisory uniqueness checks
    if store.find_by_email(&email).await?.is_some() {
        return Err(AuthError::DuplicateAccount);
    }
    if store.find_by_username(&request.username).await?.is_some() {
        return Err(AuthError::DuplicateAccount);
    }

    // 3. Hash the password off the request loop
    let password_hash = hash_password_blocking(request.password).await?;

    // 4. Persist; the store settles concurrent duplicates
    let new_account = NewAccount {
        username: request.username,
        email,
        password: password_hash,
        phone_number: request.phone_number,
        date_of_birth: request.date_of_birth,
        gender: request.gender,
        address: request.address,
    };
    let account = store.create(&new_account).await.map_err(|e| match e {
        StoreError::DuplicateKey(_) => AuthError::DuplicateAccount,
        other => other.into(),
    })?;

    // 5. Issue a session token
    let token = issuer.issue(account.id, &account.username)?;

    info!(
        account_id = %account.id,
        username = %account.username,
        "New account registered"
    );

    Ok(AuthOutcome {
        token,
        account: account.info(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::MemoryAccountStore;
    use crate::auth::{ValidationError, DEFAULT_TOKEN_EXPIRY_SECS};

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("test-secret", DEFAULT_TOKEN_EXPIRY_SECS)
    }

    fn sample_request() -> RegistrationRequest {
        RegistrationRequest {
            username: "asha_verma".to_string(),
            email: "Asha@Example.com".to_string(),
            password: "correct horse battery".to_string(),
            phone_number: "+91-9876543210".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            gender: "female".to_string(),
            address: "12 MG Road, Pune".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let store = MemoryAccountStore::new();
        let issuer = issuer();

        let outcome = register(&store, &issuer, sample_request()).await.unwrap();

        assert!(!outcome.token.is_empty());
        assert_eq!(outcome.account.username, "asha_verma");
        // Email normalized to lowercase
        assert_eq!(outcome.account.email, "asha@example.com");
        assert_eq!(store.count().await, 1);

        // The issued token verifies back to the new account
        let claims = issuer.verify(&outcome.token).unwrap();
        assert_eq!(claims.sub, outcome.account.id);
        assert_eq!(claims.username, "asha_verma");
    }

    #[tokio::test]
    async fn test_register_stores_verifier_not_plaintext() {
        let store = MemoryAccountStore::new();
        let outcome = register(&store, &issuer(), sample_request()).await.unwrap();

        let stored = store
            .find_by_id(outcome.account.id)
            .await
            .unwrap()
            .unwrap();
        assert_ne!(stored.password, "correct horse battery");
        assert!(stored.password.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let store = MemoryAccountStore::new();
        let issuer = issuer();

        register(&store, &issuer, sample_request()).await.unwrap();

        let mut second = sample_request();
        second.username = "other_user".to_string();
        let result = register(&store, &issuer, second).await;

        assert!(matches!(result, Err(AuthError::DuplicateAccount)));
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let store = MemoryAccountStore::new();
        let issuer = issuer();

        register(&store, &issuer, sample_request()).await.unwrap();

        let mut second = sample_request();
        second.email = "other@example.com".to_string();
        let result = register(&store, &issuer, second).await;

        assert!(matches!(result, Err(AuthError::DuplicateAccount)));
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let store = MemoryAccountStore::new();
        let issuer = issuer();

        let mut request = sample_request();
        request.address = "  ".to_string();
        let result = register(&store, &issuer, request).await;
        assert!(matches!(
            result,
            Err(AuthError::Validation(ValidationError::FieldRequired("address")))
        ));

        let mut request = sample_request();
        request.phone_number = String::new();
        let result = register(&store, &issuer, request).await;
        assert!(matches!(result, Err(AuthError::Validation(_))));

        // Nothing was persisted on the failure paths
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn test_register_invalid_email() {
        let store = MemoryAccountStore::new();
        let mut request = sample_request();
        request.email = "not-an-email".to_string();

        let result = register(&store, &issuer(), request).await;
        assert!(matches!(
            result,
            Err(AuthError::Validation(ValidationError::EmailInvalidFormat))
        ));
    }

    #[tokio::test]
    async fn test_register_short_password() {
        let store = MemoryAccountStore::new();
        let mut request = sample_request();
        request.password = "short".to_string();

        let result = register(&store, &issuer(), request).await;
        assert!(matches!(
            result,
            Err(AuthError::Validation(ValidationError::PasswordTooShort))
        ));
    }
}
