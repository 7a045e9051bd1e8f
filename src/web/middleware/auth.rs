//! Bearer-token authentication extractor.

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, Request},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::auth::{Claims, TokenError, TokenIssuer};
use crate::web::error::ApiError;

/// Extractor for authenticated requests.
///
/// Verifies the `Authorization: Bearer` token and hands the handler the
/// verified claims. The claims' subject is the only identity handlers may
/// act on for sensitive mutations.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let token = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|header| header.strip_prefix("Bearer "))
                .ok_or_else(|| ApiError::unauthorized("Missing authorization"))?;

            let issuer = parts
                .extensions
                .get::<Arc<TokenIssuer>>()
                .ok_or_else(|| ApiError::internal("Token issuer not configured"))?;

            let claims = issuer.verify(token).map_err(|e| {
                tracing::debug!("Token verification failed: {}", e);
                match e {
                    TokenError::Expired => ApiError::unauthorized("Token expired"),
                    _ => ApiError::unauthorized("Invalid token"),
                }
            })?;

            Ok(AuthUser(claims))
        })
    }
}

/// Middleware function to inject the token issuer into request extensions.
pub async fn token_auth(
    issuer: Arc<TokenIssuer>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    request.extensions_mut().insert(issuer);
    next.run(request).await
}
