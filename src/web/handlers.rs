//! HTTP handlers for the credential flows.
//!
//! Handlers only parse input, call the flow, and map the outcome; all
//! policy lives in `crate::auth`.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::account::SharedStore;
use crate::auth::{self, AuthOutcome, TokenIssuer};
use crate::web::dto::{
    ApiResponse, AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest,
};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Account store.
    pub store: SharedStore,
    /// Session token issuer.
    pub issuer: Arc<TokenIssuer>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(store: SharedStore, issuer: Arc<TokenIssuer>) -> Self {
        Self { store, issuer }
    }

    fn auth_response(&self, outcome: AuthOutcome) -> AuthResponse {
        AuthResponse {
            token: outcome.token,
            expires_in: self.issuer.expiry_secs(),
            account: outcome.account,
        }
    }
}

/// POST /api/auth/register - Account registration.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    let request = auth::RegistrationRequest {
        username: req.username,
        email: req.email,
        password: req.password,
        phone_number: req.phone_number,
        date_of_birth: req.date_of_birth,
        gender: req.gender,
        address: req.address,
    };

    let outcome = auth::register(state.store.as_ref(), &state.issuer, request).await?;

    Ok(Json(ApiResponse::new(state.auth_response(outcome))))
}

/// POST /api/auth/login - Login.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    let request = auth::LoginRequest {
        username: req.username,
        password: req.password,
    };

    let outcome = auth::login(state.store.as_ref(), &state.issuer, request).await?;

    Ok(Json(ApiResponse::new(state.auth_response(outcome))))
}

/// POST /api/account/password - Change the caller's password.
///
/// The operand is always the verified token subject.
pub async fn change_password(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let request = auth::ChangePasswordRequest {
        current_password: req.current_password,
        new_password: req.new_password,
    };

    auth::change_password(state.store.as_ref(), claims.sub, request).await?;

    Ok(Json(ApiResponse::new(())))
}

/// GET /api/auth/me - Current account info.
pub async fn me(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<Json<ApiResponse<crate::account::AccountInfo>>, ApiError> {
    let account = state
        .store
        .find_by_id(claims.sub)
        .await
        .map_err(|e| {
            tracing::error!("Store error: {}", e);
            ApiError::internal("An internal error occurred")
        })?
        .ok_or_else(|| ApiError::not_found("Account not found"))?;

    Ok(Json(ApiResponse::new(account.info())))
}
