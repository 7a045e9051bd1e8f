//! Password change flow.

use tracing::info;
use uuid::Uuid;

use crate::account::AccountStore;
use crate::auth::validation::{validate_password, validate_required};
use crate::auth::{hash_password_blocking, verify_password_blocking, AuthError};

/// Password change request data.
#[derive(Debug, Clone)]
pub struct ChangePasswordRequest {
    /// Current plaintext password.
    pub current_password: String,
    /// New plaintext password.
    pub new_password: String,
}

/// Change the password of the verified token subject.
///
/// `subject_id` must come from a verified session token, never from request
/// input, so a caller cannot rotate another account's secret. Outstanding
/// tokens stay valid until their natural expiry; a password change does not
/// invalidate them (stateless tokens, documented limitation).
pub async fn change_password(
    store: &dyn AccountStore,
    subject_id: Uuid,
    request: ChangePasswordRequest,
) -> Result<(), AuthError> {
    validate_required("current_password", &request.current_password)?;
    validate_password(&request.new_password)?;

    let mut account = store
        .find_by_id(subject_id)
        .await?
        .ok_or(AuthError::AccountNotFound)?;

    if !verify_password_blocking(request.current_password, account.password.clone()).await {
        return Err(AuthError::InvalidCredentials);
    }

    account.password = hash_password_blocking(request.new_password).await?;
    store.save(&account).await?;

    info!(
        account_id = %account.id,
        username = %account.username,
        "Password changed"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::MemoryAccountStore;
    use crate::auth::{
        login, register, LoginRequest, RegistrationRequest, TokenIssuer, ValidationError,
        DEFAULT_TOKEN_EXPIRY_SECS,
    };
    use chrono::NaiveDate;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("test-secret", DEFAULT_TOKEN_EXPIRY_SECS)
    }

    async fn seed_account(store: &MemoryAccountStore, issuer: &TokenIssuer) -> Uuid {
        let request = RegistrationRequest {
            username: "asha_verma".to_string(),
            email: "asha@example.com".to_string(),
            password: "old password 1".to_string(),
            phone_number: "+91-9876543210".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            gender: "female".to_string(),
            address: "12 MG Road, Pune".to_string(),
        };
        register(store, issuer, request).await.unwrap().account.id
    }

    #[tokio::test]
    async fn test_change_password_then_login_with_new() {
        let store = MemoryAccountStore::new();
        let issuer = issuer();
        let id = seed_account(&store, &issuer).await;

        change_password(
            &store,
            id,
            ChangePasswordRequest {
                current_password: "old password 1".to_string(),
                new_password: "new password 2".to_string(),
            },
        )
        .await
        .unwrap();

        // New password works
        let outcome = login(
            &store,
            &issuer,
            LoginRequest {
                username: "asha_verma".to_string(),
                password: "new password 2".to_string(),
            },
        )
        .await;
        assert!(outcome.is_ok());

        // Old password no longer works
        let result = login(
            &store,
            &issuer,
            LoginRequest {
                username: "asha_verma".to_string(),
                password: "old password 1".to_string(),
            },
        )
        .await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_change_password_wrong_current() {
        let store = MemoryAccountStore::new();
        let issuer = issuer();
        let id = seed_account(&store, &issuer).await;

        let result = change_password(
            &store,
            id,
            ChangePasswordRequest {
                current_password: "not the password".to_string(),
                new_password: "new password 2".to_string(),
            },
        )
        .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_change_password_missing_account() {
        let store = MemoryAccountStore::new();

        let result = change_password(
            &store,
            Uuid::new_v4(),
            ChangePasswordRequest {
                current_password: "old password 1".to_string(),
                new_password: "new password 2".to_string(),
            },
        )
        .await;

        assert!(matches!(result, Err(AuthError::AccountNotFound)));
    }

    #[tokio::test]
    async fn test_change_password_weak_new_password() {
        let store = MemoryAccountStore::new();
        let issuer = issuer();
        let id = seed_account(&store, &issuer).await;

        let result = change_password(
            &store,
            id,
            ChangePasswordRequest {
                current_password: "old password 1".to_string(),
                new_password: "weak".to_string(),
            },
        )
        .await;

        assert!(matches!(
            result,
            Err(AuthError::Validation(ValidationError::PasswordTooShort))
        ));
    }

    #[tokio::test]
    async fn test_existing_token_survives_password_change() {
        let store = MemoryAccountStore::new();
        let issuer = issuer();
        let id = seed_account(&store, &issuer).await;

        let token = issuer.issue(id, "asha_verma").unwrap();

        change_password(
            &store,
            id,
            ChangePasswordRequest {
                current_password: "old password 1".to_string(),
                new_password: "new password 2".to_string(),
            },
        )
        .await
        .unwrap();

        // Stateless tokens are not revoked by a password change
        assert!(issuer.verify(&token).is_ok());
    }
}
