//! Data transfer objects for the Web API.

mod request;
mod response;

pub use request::{ChangePasswordRequest, LoginRequest, RegisterRequest};
pub use response::{ApiResponse, AuthResponse};
