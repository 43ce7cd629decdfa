//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! `update*` and `delete` on a missing id fail with a database error rather
//! than a not-found; only reads report absence as `None`.

use chrono::{DateTime, Utc};
use kernel::id::{EventId, ParticipantId, RegistrationId};

use crate::domain::entity::event::{Event, EventChanges, NewEvent};
use crate::domain::entity::participant::{NewParticipant, Participant, ParticipantChanges};
use crate::domain::entity::registration::{
    NewRegistration, Registration, RegistrationChanges, RegistrationDetails,
};
use crate::error::RegistryResult;

/// Event persistence
#[trait_variant::make(EventRepository: Send)]
pub trait LocalEventRepository {
    async fn list_events(&self) -> RegistryResult<Vec<Event>>;

    async fn find_event(&self, id: EventId) -> RegistryResult<Option<Event>>;

    /// Events dated at or after `now`, earliest first
    async fn list_events_from(&self, now: DateTime<Utc>) -> RegistryResult<Vec<Event>>;

    async fn create_event(&self, event: NewEvent) -> RegistryResult<Event>;

    async fn update_event(&self, id: EventId, changes: EventChanges) -> RegistryResult<Event>;

    async fn delete_event(&self, id: EventId) -> RegistryResult<()>;
}

/// Participant persistence
#[trait_variant::make(ParticipantRepository: Send)]
pub trait LocalParticipantRepository {
    async fn list_participants(&self) -> RegistryResult<Vec<Participant>>;

    async fn find_participant(&self, id: ParticipantId) -> RegistryResult<Option<Participant>>;

    async fn create_participant(&self, participant: NewParticipant) -> RegistryResult<Participant>;

    async fn update_participant(
        &self,
        id: ParticipantId,
        changes: ParticipantChanges,
    ) -> RegistryResult<Participant>;

    async fn delete_participant(&self, id: ParticipantId) -> RegistryResult<()>;
}

/// Registration persistence
#[trait_variant::make(RegistrationRepository: Send)]
pub trait LocalRegistrationRepository {
    /// All registrations with event and participant joined
    async fn list_registrations(&self) -> RegistryResult<Vec<RegistrationDetails>>;

    async fn find_registration(
        &self,
        id: RegistrationId,
    ) -> RegistryResult<Option<RegistrationDetails>>;

    /// Registrations for one event, participant joined
    async fn list_registrations_for_event(
        &self,
        event_id: EventId,
    ) -> RegistryResult<Vec<RegistrationDetails>>;

    /// Registrations of one participant, event joined
    async fn list_registrations_for_participant(
        &self,
        participant_id: ParticipantId,
    ) -> RegistryResult<Vec<RegistrationDetails>>;

    /// Registrations made at or after `since`, both sides joined
    async fn list_registrations_since(
        &self,
        since: DateTime<Utc>,
    ) -> RegistryResult<Vec<RegistrationDetails>>;

    async fn create_registration(
        &self,
        registration: NewRegistration,
    ) -> RegistryResult<Registration>;

    async fn update_registration(
        &self,
        id: RegistrationId,
        changes: RegistrationChanges,
    ) -> RegistryResult<Registration>;

    async fn delete_registration(&self, id: RegistrationId) -> RegistryResult<()>;
}


/// Everything the registry routes need from a single store
pub trait RegistryRepository:
    EventRepository + ParticipantRepository + RegistrationRepository + Clone + Send + Sync + 'static
{
}

impl<T> RegistryRepository for T where
    T: EventRepository
        + ParticipantRepository
        + RegistrationRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}
