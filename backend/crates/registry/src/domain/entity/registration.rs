//! Registration Entity

use chrono::{DateTime, Utc};
use kernel::id::{EventId, ParticipantId, RegistrationId};

use super::event::Event;
use super::participant::Participant;

/// Join record linking one participant to one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub id: RegistrationId,
    pub event_id: EventId,
    pub participant_id: ParticipantId,
    pub registration_date: DateTime<Utc>,
}

/// A registration with its related rows joined in
#[derive(Debug, Clone)]
pub struct RegistrationDetails {
    pub registration: Registration,
    pub event: Option<Event>,
    pub participant: Option<Participant>,
}

/// Which related rows to join into a registration read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Embed {
    Both,
    Event,
    Participant,
}

impl Embed {
    pub fn event(self) -> bool {
        matches!(self, Embed::Both | Embed::Event)
    }

    pub fn participant(self) -> bool {
        matches!(self, Embed::Both | Embed::Participant)
    }
}

/// Fields for a new registration row. `registration_date` is set by the
/// database.
#[derive(Debug, Clone, Copy)]
pub struct NewRegistration {
    pub event_id: EventId,
    pub participant_id: ParticipantId,
}

/// Partial update
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationChanges {
    pub event_id: Option<EventId>,
    pub participant_id: Option<ParticipantId>,
}

impl RegistrationChanges {
    pub fn apply(self, registration: &mut Registration) {
        if let Some(event_id) = self.event_id {
            registration.event_id = event_id;
        }
        if let Some(participant_id) = self.participant_id {
            registration.participant_id = participant_id;
        }
    }
}
