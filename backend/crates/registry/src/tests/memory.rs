//! In-memory store standing in for PostgreSQL.
//!
//! Mirrors the database behaviour the handlers depend on: serial ids,
//! unique emails, foreign keys with cascading deletes, and "no row" errors
//! from update/delete on a missing id.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use auth::Email;
use auth::domain::entity::credential::Credential;
use auth::domain::repository::CredentialRepository;
use auth::error::AuthResult;
use chrono::{DateTime, Utc};
use kernel::id::{EventId, ParticipantId, RegistrationId};
use platform::password::HashedPassword;

use crate::domain::entity::event::{Event, EventChanges, NewEvent};
use crate::domain::entity::participant::{NewParticipant, Participant, ParticipantChanges};
use crate::domain::entity::registration::{
    Embed, NewRegistration, Registration, RegistrationChanges, RegistrationDetails,
};
use crate::domain::repository::{EventRepository, ParticipantRepository, RegistrationRepository};
use crate::error::{RegistryError, RegistryResult};

#[derive(Clone, Default)]
pub struct MemoryRegistry {
    tables: Arc<Mutex<Tables>>,
}

#[derive(Default)]
struct Tables {
    events: BTreeMap<i32, Event>,
    participants: BTreeMap<i32, StoredParticipant>,
    registrations: BTreeMap<i32, Registration>,
    last_event_id: i32,
    last_participant_id: i32,
    last_registration_id: i32,
}

#[derive(Clone)]
struct StoredParticipant {
    participant: Participant,
    password_hash: HashedPassword,
}

fn constraint_violation(what: &str) -> RegistryError {
    RegistryError::Internal(format!("constraint violation: {}", what))
}

impl MemoryRegistry {
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    pub fn participant_count(&self) -> usize {
        self.tables().participants.len()
    }

    pub fn stored_hash(&self, id: ParticipantId) -> Option<String> {
        self.tables()
            .participants
            .get(&id.get())
            .map(|p| p.password_hash.as_phc_string().to_string())
    }

    /// Insert a registration with a chosen date
    pub fn insert_registration_at(
        &self,
        event_id: EventId,
        participant_id: ParticipantId,
        registration_date: DateTime<Utc>,
    ) -> RegistrationId {
        let mut tables = self.tables();
        tables.last_registration_id += 1;
        let id = RegistrationId::new(tables.last_registration_id);
        tables.registrations.insert(
            id.get(),
            Registration {
                id,
                event_id,
                participant_id,
                registration_date,
            },
        );
        id
    }
}

impl Tables {
    fn details(&self, registration: &Registration, embed: Embed) -> RegistrationDetails {
        RegistrationDetails {
            registration: registration.clone(),
            event: embed
                .event()
                .then(|| self.events.get(&registration.event_id.get()).cloned())
                .flatten(),
            participant: embed
                .participant()
                .then(|| {
                    self.participants
                        .get(&registration.participant_id.get())
                        .map(|p| p.participant.clone())
                })
                .flatten(),
        }
    }

    fn select(
        &self,
        filter: impl Fn(&Registration) -> bool,
        embed: Embed,
    ) -> Vec<RegistrationDetails> {
        self.registrations
            .values()
            .filter(|&r| filter(r))
            .map(|r| self.details(r, embed))
            .collect()
    }

    fn check_references(&self, registration: &Registration) -> RegistryResult<()> {
        if !self.events.contains_key(&registration.event_id.get()) {
            return Err(constraint_violation("registrations.event_id"));
        }
        if !self.participants.contains_key(&registration.participant_id.get()) {
            return Err(constraint_violation("registrations.participant_id"));
        }
        Ok(())
    }

    fn email_taken(&self, email: &Email, except: Option<ParticipantId>) -> bool {
        self.participants
            .values()
            .any(|p| &p.participant.email == email && Some(p.participant.id) != except)
    }
}

impl EventRepository for MemoryRegistry {
    async fn list_events(&self) -> RegistryResult<Vec<Event>> {
        Ok(self.tables().events.values().cloned().collect())
    }

    async fn find_event(&self, id: EventId) -> RegistryResult<Option<Event>> {
        Ok(self.tables().events.get(&id.get()).cloned())
    }

    async fn list_events_from(&self, now: DateTime<Utc>) -> RegistryResult<Vec<Event>> {
        let mut events: Vec<Event> = self
            .tables()
            .events
            .values()
            .filter(|e| e.date >= now)
            .cloned()
            .collect();
        events.sort_by_key(|e| (e.date, e.id.get()));
        Ok(events)
    }

    async fn create_event(&self, event: NewEvent) -> RegistryResult<Event> {
        let mut tables = self.tables();
        tables.last_event_id += 1;
        let event = Event {
            id: EventId::new(tables.last_event_id),
            name: event.name,
            description: event.description,
            date: event.date,
            location: event.location,
            capacity: event.capacity,
        };
        tables.events.insert(event.id.get(), event.clone());
        Ok(event)
    }

    async fn update_event(&self, id: EventId, changes: EventChanges) -> RegistryResult<Event> {
        let mut tables = self.tables();
        let event = tables
            .events
            .get_mut(&id.get())
            .ok_or(sqlx::Error::RowNotFound)?;
        changes.apply(event);
        Ok(event.clone())
    }

    async fn delete_event(&self, id: EventId) -> RegistryResult<()> {
        let mut tables = self.tables();
        tables
            .events
            .remove(&id.get())
            .ok_or(sqlx::Error::RowNotFound)?;
        tables.registrations.retain(|_, r| r.event_id != id);
        Ok(())
    }
}

impl ParticipantRepository for MemoryRegistry {
    async fn list_participants(&self) -> RegistryResult<Vec<Participant>> {
        Ok(self
            .tables()
            .participants
            .values()
            .map(|p| p.participant.clone())
            .collect())
    }

    async fn find_participant(&self, id: ParticipantId) -> RegistryResult<Option<Participant>> {
        Ok(self
            .tables()
            .participants
            .get(&id.get())
            .map(|p| p.participant.clone()))
    }

    async fn create_participant(&self, participant: NewParticipant) -> RegistryResult<Participant> {
        let mut tables = self.tables();
        if tables.email_taken(&participant.email, None) {
            return Err(constraint_violation("participants.email"));
        }

        tables.last_participant_id += 1;
        let stored = StoredParticipant {
            participant: Participant {
                id: ParticipantId::new(tables.last_participant_id),
                name: participant.name,
                email: participant.email,
                phone_number: participant.phone_number,
            },
            password_hash: participant.password_hash,
        };
        let created = stored.participant.clone();
        tables.participants.insert(created.id.get(), stored);
        Ok(created)
    }

    async fn update_participant(
        &self,
        id: ParticipantId,
        changes: ParticipantChanges,
    ) -> RegistryResult<Participant> {
        let mut tables = self.tables();
        if let Some(email) = &changes.email
            && tables.email_taken(email, Some(id))
        {
            return Err(constraint_violation("participants.email"));
        }

        let stored = tables
            .participants
            .get_mut(&id.get())
            .ok_or(sqlx::Error::RowNotFound)?;
        changes.apply(&mut stored.participant);
        Ok(stored.participant.clone())
    }

    async fn delete_participant(&self, id: ParticipantId) -> RegistryResult<()> {
        let mut tables = self.tables();
        tables
            .participants
            .remove(&id.get())
            .ok_or(sqlx::Error::RowNotFound)?;
        tables.registrations.retain(|_, r| r.participant_id != id);
        Ok(())
    }
}

impl RegistrationRepository for MemoryRegistry {
    async fn list_registrations(&self) -> RegistryResult<Vec<RegistrationDetails>> {
        Ok(self.tables().select(|_| true, Embed::Both))
    }

    async fn find_registration(
        &self,
        id: RegistrationId,
    ) -> RegistryResult<Option<RegistrationDetails>> {
        let tables = self.tables();
        Ok(tables
            .registrations
            .get(&id.get())
            .map(|r| tables.details(r, Embed::Both)))
    }

    async fn list_registrations_for_event(
        &self,
        event_id: EventId,
    ) -> RegistryResult<Vec<RegistrationDetails>> {
        Ok(self
            .tables()
            .select(|r| r.event_id == event_id, Embed::Participant))
    }

    async fn list_registrations_for_participant(
        &self,
        participant_id: ParticipantId,
    ) -> RegistryResult<Vec<RegistrationDetails>> {
        Ok(self
            .tables()
            .select(|r| r.participant_id == participant_id, Embed::Event))
    }

    async fn list_registrations_since(
        &self,
        since: DateTime<Utc>,
    ) -> RegistryResult<Vec<RegistrationDetails>> {
        Ok(self
            .tables()
            .select(|r| r.registration_date >= since, Embed::Both))
    }

    async fn create_registration(
        &self,
        registration: NewRegistration,
    ) -> RegistryResult<Registration> {
        let mut tables = self.tables();
        let candidate = Registration {
            id: RegistrationId::new(tables.last_registration_id + 1),
            event_id: registration.event_id,
            participant_id: registration.participant_id,
            registration_date: Utc::now(),
        };
        tables.check_references(&candidate)?;

        tables.last_registration_id += 1;
        tables
            .registrations
            .insert(candidate.id.get(), candidate.clone());
        Ok(candidate)
    }

    async fn update_registration(
        &self,
        id: RegistrationId,
        changes: RegistrationChanges,
    ) -> RegistryResult<Registration> {
        let mut tables = self.tables();
        let mut updated = tables
            .registrations
            .get(&id.get())
            .cloned()
            .ok_or(sqlx::Error::RowNotFound)?;
        changes.apply(&mut updated);
        tables.check_references(&updated)?;

        tables.registrations.insert(id.get(), updated.clone());
        Ok(updated)
    }

    async fn delete_registration(&self, id: RegistrationId) -> RegistryResult<()> {
        self.tables()
            .registrations
            .remove(&id.get())
            .ok_or(sqlx::Error::RowNotFound)?;
        Ok(())
    }
}

impl CredentialRepository for MemoryRegistry {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Credential>> {
        Ok(self
            .tables()
            .participants
            .values()
            .find(|p| &p.participant.email == email)
            .map(|p| Credential {
                participant_id: p.participant.id,
                email: p.participant.email.clone(),
                password_hash: p.password_hash.clone(),
            }))
    }
}
