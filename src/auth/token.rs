//! Session token issuance and verification.
//!
//! Tokens are self-contained signed assertions (HS256 JWT) carrying the
//! subject ID and username. Nothing is stored server-side and nothing can be
//! revoked early; expiry is the only termination mechanism, which also means
//! a leaked signing secret invalidates every outstanding token at once.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Default session token lifetime: 24 hours.
pub const DEFAULT_TOKEN_EXPIRY_SECS: u64 = 86400;

/// Token errors.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Signature or structure check failed.
    #[error("invalid token")]
    Invalid,

    /// Token is past its expiry.
    #[error("token expired")]
    Expired,

    /// Token could not be issued.
    #[error("token issuance failed: {0}")]
    Issue(String),
}

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID).
    pub sub: Uuid,
    /// Denormalized username.
    pub username: String,
    /// Issued at (Unix seconds).
    pub iat: u64,
    /// Expiry (Unix seconds).
    pub exp: u64,
    /// Token ID.
    pub jti: String,
}

/// Issues and verifies session tokens with a process-wide secret.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_secs: u64,
}

impl TokenIssuer {
    /// Create an issuer from the configured signing secret.
    pub fn new(secret: &str, expiry_secs: u64) -> Self {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiry_secs,
        }
    }

    /// Token lifetime in seconds.
    pub fn expiry_secs(&self) -> u64 {
        self.expiry_secs
    }

    /// Issue a signed token for the given subject.
    pub fn issue(&self, subject_id: Uuid, username: &str) -> Result<String, TokenError> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: subject_id,
            username: username.to_string(),
            iat: now,
            exp: now + self.expiry_secs,
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Issue(e.to_string()))
    }

    /// Verify a token's signature and expiry, returning its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}
