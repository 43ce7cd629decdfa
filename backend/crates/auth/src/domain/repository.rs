//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::credential::Credential;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Credential lookup for login
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Find the credentials of the participant registered under `email`
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Credential>>;
}
