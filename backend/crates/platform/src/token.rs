//! Signed Session Tokens
//!
//! HS256 JWTs carrying an arbitrary payload plus `iat`/`exp`.
//! Expiry is checked with zero leeway.

use std::fmt;
use std::time::Duration;

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing failed (payload could not be serialized)
    #[error("Token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// `exp` is in the past
    #[error("Token expired")]
    Expired,

    /// Bad signature, wrong algorithm, or malformed token
    #[error("Token invalid")]
    Invalid,
}

/// Payload plus registered time claims, serialized flat:
/// `{ ..payload, "iat": .., "exp": .. }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims<P> {
    #[serde(flatten)]
    pub payload: P,
    /// Issued at, seconds since the Unix epoch
    pub iat: u64,
    /// Expires at, seconds since the Unix epoch
    pub exp: u64,
}

/// Issues and verifies tokens with one shared secret.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign `payload`, valid from now for the configured TTL.
    pub fn issue<P: Serialize>(&self, payload: P) -> Result<(String, Claims<P>), TokenError> {
        self.issue_at(payload, jsonwebtoken::get_current_timestamp())
    }

    /// Sign `payload` as if issued at `now` (seconds since the epoch).
    pub fn issue_at<P: Serialize>(
        &self,
        payload: P,
        now: u64,
    ) -> Result<(String, Claims<P>), TokenError> {
        let claims = Claims {
            payload,
            iat: now,
            exp: now + self.ttl.as_secs(),
        };

        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(TokenError::Signing)?;

        Ok((token, claims))
    }

    /// Check signature and expiry, returning the claims.
    pub fn verify<P: DeserializeOwned>(&self, token: &str) -> Result<Claims<P>, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        jsonwebtoken::decode::<Claims<P>>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}
