//! Event Use Cases

use chrono::Utc;
use kernel::id::{EventId, ParticipantId};
use std::sync::Arc;

use crate::domain::entity::event::{Event, EventChanges, NewEvent};
use crate::domain::repository::EventRepository;
use crate::error::{RegistryError, RegistryResult};

pub struct EventUseCases<R>
where
    R: EventRepository,
{
    repo: Arc<R>,
}

impl<R> EventUseCases<R>
where
    R: EventRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> RegistryResult<Vec<Event>> {
        self.repo.list_events().await
    }

    pub async fn get(&self, id: EventId) -> RegistryResult<Event> {
        self.repo
            .find_event(id)
            .await?
            .ok_or(RegistryError::EventNotFound)
    }

    /// Events starting now or later, earliest first
    pub async fn list_upcoming(&self) -> RegistryResult<Vec<Event>> {
        self.repo.list_events_from(Utc::now()).await
    }

    pub async fn create(&self, event: NewEvent, actor: ParticipantId) -> RegistryResult<Event> {
        let event = self.repo.create_event(event).await?;

        tracing::info!(event_id = %event.id, actor = %actor, "Event created");

        Ok(event)
    }

    pub async fn update(
        &self,
        id: EventId,
        changes: EventChanges,
        actor: ParticipantId,
    ) -> RegistryResult<Event> {
        let event = self.repo.update_event(id, changes).await?;

        tracing::info!(event_id = %id, actor = %actor, "Event updated");

        Ok(event)
    }

    pub async fn update_capacity(
        &self,
        id: EventId,
        capacity: i32,
        actor: ParticipantId,
    ) -> RegistryResult<Event> {
        let changes = EventChanges {
            capacity: Some(capacity),
            ..Default::default()
        };
        let event = self.repo.update_event(id, changes).await?;

        tracing::info!(event_id = %id, capacity, actor = %actor, "Event capacity updated");

        Ok(event)
    }

    pub async fn delete(&self, id: EventId, actor: ParticipantId) -> RegistryResult<()> {
        self.repo.delete_event(id).await?;

        tracing::info!(event_id = %id, actor = %actor, "Event deleted");

        Ok(())
    }
}
