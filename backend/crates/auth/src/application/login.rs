//! Login Use Case
//!
//! Checks a participant's email and password and issues a session token.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::{Claims, TokenSigner};

use crate::application::config::AuthConfig;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
    pub claims: Claims<Identity>,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: CredentialRepository,
{
    repo: Arc<R>,
    signer: Arc<TokenSigner>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: CredentialRepository,
{
    pub fn new(repo: Arc<R>, signer: Arc<TokenSigner>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            signer,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // A malformed address cannot belong to anyone
        let email = Email::parse(&input.email).map_err(|_| AuthError::ParticipantNotFound)?;

        let credential = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::ParticipantNotFound)?;

        let password = ClearTextPassword::for_verification(input.password);
        if !credential.matches(&password, self.config.pepper()) {
            tracing::warn!(
                participant_id = %credential.participant_id,
                "Login rejected: password mismatch"
            );
            return Err(AuthError::InvalidCredentials);
        }

        let (token, claims) = self.signer.issue(Identity::from(&credential))?;

        tracing::info!(
            participant_id = %credential.participant_id,
            expires_at = claims.exp,
            "Participant logged in"
        );

        Ok(LoginOutput { token, claims })
    }
}
