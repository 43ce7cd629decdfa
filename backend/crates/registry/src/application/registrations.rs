//! Registration Use Cases

use kernel::id::{EventId, ParticipantId, RegistrationId};
use std::sync::Arc;

use crate::domain::entity::registration::{
    NewRegistration, Registration, RegistrationChanges, RegistrationDetails,
};
use crate::domain::repository::RegistrationRepository;
use crate::domain::value_object::timestamp::{Timestamp, TimestampError};
use crate::error::{RegistryError, RegistryResult};

pub struct RegistrationUseCases<R>
where
    R: RegistrationRepository,
{
    repo: Arc<R>,
}

impl<R> RegistrationUseCases<R>
where
    R: RegistrationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> RegistryResult<Vec<RegistrationDetails>> {
        self.repo.list_registrations().await
    }

    pub async fn get(&self, id: RegistrationId) -> RegistryResult<RegistrationDetails> {
        self.repo
            .find_registration(id)
            .await?
            .ok_or(RegistryError::RegistrationNotFound)
    }

    pub async fn list_for_event(&self, event_id: EventId) -> RegistryResult<Vec<RegistrationDetails>> {
        self.repo.list_registrations_for_event(event_id).await
    }

    pub async fn list_for_participant(
        &self,
        participant_id: ParticipantId,
    ) -> RegistryResult<Vec<RegistrationDetails>> {
        self.repo
            .list_registrations_for_participant(participant_id)
            .await
    }

    /// `date` is the raw query value; absent or unparseable is a bad request
    pub async fn list_since(&self, date: Option<&str>) -> RegistryResult<Vec<RegistrationDetails>> {
        let date = date
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| RegistryError::InvalidInput("Query parameter `date` is required".into()))?;

        let since: Timestamp = date
            .parse()
            .map_err(|e: TimestampError| RegistryError::InvalidInput(e.to_string()))?;

        self.repo.list_registrations_since(since.into_inner()).await
    }

    pub async fn create(
        &self,
        registration: NewRegistration,
        actor: ParticipantId,
    ) -> RegistryResult<Registration> {
        let registration = self.repo.create_registration(registration).await?;

        tracing::info!(
            registration_id = %registration.id,
            event_id = %registration.event_id,
            participant_id = %registration.participant_id,
            actor = %actor,
            "Registration created"
        );

        Ok(registration)
    }

    pub async fn update(
        &self,
        id: RegistrationId,
        changes: RegistrationChanges,
        actor: ParticipantId,
    ) -> RegistryResult<Registration> {
        let registration = self.repo.update_registration(id, changes).await?;

        tracing::info!(registration_id = %id, actor = %actor, "Registration updated");

        Ok(registration)
    }

    pub async fn delete(&self, id: RegistrationId, actor: ParticipantId) -> RegistryResult<()> {
        self.repo.delete_registration(id).await?;

        tracing::info!(registration_id = %id, actor = %actor, "Registration deleted");

        Ok(())
    }
}
