//! Request DTOs for the Web API.
//!
//! Each flow's input is an explicit structured type; missing fields are
//! rejected at deserialization or by flow validation, never inferred at use.

use chrono::NaiveDate;
use serde::Deserialize;

/// Registration request.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Date of birth (ISO 8601 date).
    pub date_of_birth: NaiveDate,
    /// Gender.
    pub gender: String,
    /// Residential address.
    pub address: String,
}

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Password change request.
///
/// The account is always the verified token subject; there is intentionally
/// no identifier field here.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    /// Current password.
    pub current_password: String,
    /// New password.
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_deserialize() {
        let json = r#"{
            "username": "asha_verma",
            "email": "asha@example.com",
            "password": "correct horse battery",
            "phone_number": "+91-9876543210",
            "date_of_birth": "1990-04-12",
            "gender": "female",
            "address": "12 MG Road, Pune"
        }"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.username, "asha_verma");
        assert_eq!(
            request.date_of_birth,
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap()
        );
    }

    #[test]
    fn test_register_request_missing_field_rejected() {
        let json = r#"{"username": "asha_verma", "password": "pw"}"#;
        let result: Result<RegisterRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_change_password_request_ignores_identifier() {
        // An attacker-supplied email field is simply dropped
        let json = r#"{
            "current_password": "old",
            "new_password": "new password 2",
            "email": "victim@example.com"
        }"#;
        let request: ChangePasswordRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.current_password, "old");
    }
}
