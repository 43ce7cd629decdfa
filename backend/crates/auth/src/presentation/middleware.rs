//! Auth Middleware
//!
//! Bearer-token gate for protected routes.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{DateTime, Utc};
use kernel::id::ParticipantId;
use std::sync::Arc;

use platform::token::TokenSigner;

use crate::application::VerifyTokenUseCase;
use crate::application::config::AuthConfig;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct TokenGate {
    verifier: Arc<VerifyTokenUseCase>,
}

impl TokenGate {
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_signer(Arc::new(config.signer()))
    }

    pub fn from_signer(signer: Arc<TokenSigner>) -> Self {
        Self {
            verifier: Arc::new(VerifyTokenUseCase::new(signer)),
        }
    }
}

/// Verified token holder, stored in request extensions
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub id: ParticipantId,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

/// Middleware that requires `Authorization: Bearer <token>`
///
/// No usable header is 401; a token that fails verification is 403.
pub async fn require_bearer_token(
    State(gate): State<TokenGate>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(req.headers()).ok_or(AuthError::MissingToken)?;

    let claims = gate.verifier.execute(token)?;

    let expires_at = i64::try_from(claims.exp)
        .ok()
        .and_then(|exp| DateTime::from_timestamp(exp, 0))
        .ok_or(AuthError::InvalidToken)?;

    req.extensions_mut().insert(Authenticated {
        id: claims.payload.id,
        email: claims.payload.email,
        expires_at,
    });

    Ok(next.run(req).await)
}

fn bearer_token(headers: &axum::http::HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Authenticated>()
            .cloned()
            .ok_or(AuthError::MissingToken)
    }
}
