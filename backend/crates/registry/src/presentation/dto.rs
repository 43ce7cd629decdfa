//! API DTOs (Data Transfer Objects)
//!
//! Keys are snake_case, matching the column names.

use chrono::{DateTime, Utc};
use kernel::id::{EventId, ParticipantId, RegistrationId};
use serde::{Deserialize, Serialize};

use auth::Email;

use crate::domain::entity::event::{Event, EventChanges, NewEvent};
use crate::domain::entity::participant::{Participant, ParticipantChanges};
use crate::domain::entity::registration::{
    NewRegistration, Registration, RegistrationChanges, RegistrationDetails,
};
use crate::domain::value_object::timestamp::Timestamp;
use crate::error::RegistryResult;

// ============================================================================
// Events
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: Option<String>,
    pub date: Timestamp,
    pub location: String,
    pub capacity: i32,
}

impl From<CreateEventRequest> for NewEvent {
    fn from(req: CreateEventRequest) -> Self {
        NewEvent {
            name: req.name,
            description: req.description,
            date: req.date.into_inner(),
            location: req.location,
            capacity: req.capacity,
        }
    }
}

/// Omitted fields are left unchanged
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<Timestamp>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
}

impl From<UpdateEventRequest> for EventChanges {
    fn from(req: UpdateEventRequest) -> Self {
        EventChanges {
            name: req.name,
            description: req.description,
            date: req.date.map(Timestamp::into_inner),
            location: req.location,
            capacity: req.capacity,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCapacityRequest {
    pub capacity: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: EventId,
    pub name: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub location: String,
    pub capacity: i32,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            date: event.date,
            location: event.location,
            capacity: event.capacity,
        }
    }
}

// ============================================================================
// Participants
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateParticipantRequest {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    /// Missing is treated like an empty password and rejected by policy
    #[serde(default)]
    pub password: Option<String>,
}

/// Password changes are not accepted here; a `password` key is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateParticipantRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl UpdateParticipantRequest {
    pub fn into_changes(self) -> RegistryResult<ParticipantChanges> {
        Ok(ParticipantChanges {
            name: self.name,
            email: self.email.map(Email::parse).transpose()?,
            phone_number: self.phone_number,
        })
    }
}

/// Participant as returned to clients. Has no password field at all.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantResponse {
    pub id: ParticipantId,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        Self {
            id: participant.id,
            name: participant.name,
            email: participant.email.into(),
            phone_number: participant.phone_number,
        }
    }
}

// ============================================================================
// Registrations
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRegistrationRequest {
    pub event_id: EventId,
    pub participant_id: ParticipantId,
}

impl From<CreateRegistrationRequest> for NewRegistration {
    fn from(req: CreateRegistrationRequest) -> Self {
        NewRegistration {
            event_id: req.event_id,
            participant_id: req.participant_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRegistrationRequest {
    pub event_id: Option<EventId>,
    pub participant_id: Option<ParticipantId>,
}

impl From<UpdateRegistrationRequest> for RegistrationChanges {
    fn from(req: UpdateRegistrationRequest) -> Self {
        RegistrationChanges {
            event_id: req.event_id,
            participant_id: req.participant_id,
        }
    }
}

/// `GET /registrations/date?date=...`
#[derive(Debug, Clone, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResponse {
    pub id: RegistrationId,
    pub event_id: EventId,
    pub participant_id: ParticipantId,
    pub registration_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EventResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<ParticipantResponse>,
}

impl From<Registration> for RegistrationResponse {
    fn from(registration: Registration) -> Self {
        Self {
            id: registration.id,
            event_id: registration.event_id,
            participant_id: registration.participant_id,
            registration_date: registration.registration_date,
            event: None,
            participant: None,
        }
    }
}

impl From<RegistrationDetails> for RegistrationResponse {
    fn from(details: RegistrationDetails) -> Self {
        Self {
            event: details.event.map(EventResponse::from),
            participant: details.participant.map(ParticipantResponse::from),
            ..Self::from(details.registration)
        }
    }
}
