//! Participant Use Cases

use auth::Email;
use kernel::id::ParticipantId;
use platform::password::ClearTextPassword;
use std::sync::Arc;

use crate::application::config::RegistryConfig;
use crate::domain::entity::participant::{NewParticipant, Participant, ParticipantChanges};
use crate::domain::repository::ParticipantRepository;
use crate::error::{RegistryError, RegistryResult};

/// Create participant input
pub struct CreateParticipantInput {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub password: String,
}

pub struct ParticipantUseCases<R>
where
    R: ParticipantRepository,
{
    repo: Arc<R>,
    config: Arc<RegistryConfig>,
}

impl<R> ParticipantUseCases<R>
where
    R: ParticipantRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<RegistryConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn list(&self) -> RegistryResult<Vec<Participant>> {
        self.repo.list_participants().await
    }

    pub async fn get(&self, id: ParticipantId) -> RegistryResult<Participant> {
        self.repo
            .find_participant(id)
            .await?
            .ok_or(RegistryError::ParticipantNotFound)
    }

    /// Validate, hash and store. Nothing is written if the password or
    /// email is rejected.
    pub async fn create(&self, input: CreateParticipantInput) -> RegistryResult<Participant> {
        let password = ClearTextPassword::new(input.password)?;
        let email = Email::parse(&input.email)?;

        let password_hash = password.hash(self.config.pepper())?;

        let participant = self
            .repo
            .create_participant(NewParticipant {
                name: input.name,
                email,
                phone_number: input.phone_number,
                password_hash,
            })
            .await?;

        tracing::info!(participant_id = %participant.id, "Participant registered");

        Ok(participant)
    }

    pub async fn update(
        &self,
        id: ParticipantId,
        changes: ParticipantChanges,
        actor: ParticipantId,
    ) -> RegistryResult<Participant> {
        let participant = self.repo.update_participant(id, changes).await?;

        tracing::info!(participant_id = %id, actor = %actor, "Participant updated");

        Ok(participant)
    }

    pub async fn delete(&self, id: ParticipantId, actor: ParticipantId) -> RegistryResult<()> {
        self.repo.delete_participant(id).await?;

        tracing::info!(participant_id = %id, actor = %actor, "Participant deleted");

        Ok(())
    }
}
