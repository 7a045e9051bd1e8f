//! Login flow.

use tracing::{debug, info};

use crate::account::AccountStore;
use crate::auth::validation::validate_required;
use crate::auth::{verify_password_blocking, AuthError, AuthOutcome, TokenIssuer};

/// Login request data.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Authenticate a user and issue a session token.
///
/// Unknown usernames and wrong passwords both come back as
/// [`AuthError::InvalidCredentials`]; the distinction only exists in debug
/// logs, so responses cannot be used to enumerate accounts.
pub async fn login(
    store: &dyn AccountStore,
    issuer: &TokenIssuer,
    request: LoginRequest,
) -> Result<AuthOutcome, AuthError> {
    validate_required("username", &request.username)?;
    validate_required("password", &request.password)?;

    let Some(account) = store.find_by_username(&request.username).await? else {
        debug!(username = %request.username, "Login failed: unknown username");
        return Err(AuthError::InvalidCredentials);
    };

    if !verify_password_blocking(request.password, account.password.clone()).await {
        debug!(account_id = %account.id, "Login failed: password mismatch");
        return Err(AuthError::InvalidCredentials);
    }

    let token = issuer.issue(account.id, &account.username)?;

    info!(
        account_id = %account.id,
        username = %account.username,
        "Login successful"
    );

    Ok(AuthOutcome {
        token,
        account: account.info(),
    })
}
