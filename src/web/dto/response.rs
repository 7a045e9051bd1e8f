//! Response DTOs for the Web API.

use serde::Serialize;

use crate::account::AccountInfo;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Response to a successful registration or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Session token (JWT).
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
    /// Sanitized account data.
    pub account: AccountInfo,
}
