//! Verify Token Use Case
//!
//! Turns a bearer token back into the identity it was issued for.

use std::sync::Arc;

use platform::token::{Claims, TokenSigner};

use crate::domain::entity::identity::Identity;
use crate::error::AuthResult;

pub struct VerifyTokenUseCase {
    signer: Arc<TokenSigner>,
}

impl VerifyTokenUseCase {
    pub fn new(signer: Arc<TokenSigner>) -> Self {
        Self { signer }
    }

    /// Expired, forged and malformed tokens all come back as
    /// `AuthError::InvalidToken`.
    pub fn execute(&self, token: &str) -> AuthResult<Claims<Identity>> {
        Ok(self.signer.verify::<Identity>(token)?)
    }
}
