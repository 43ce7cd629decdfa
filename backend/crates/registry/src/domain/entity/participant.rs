//! Participant Entity
//!
//! The stored password hash never leaves the infrastructure layer except
//! inside [`NewParticipant`].

use auth::Email;
use kernel::id::ParticipantId;
use platform::password::HashedPassword;

/// A registered user, without credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub email: Email,
    pub phone_number: Option<String>,
}

/// Fields for a new participant row
#[derive(Debug, Clone)]
pub struct NewParticipant {
    pub name: String,
    pub email: Email,
    pub phone_number: Option<String>,
    pub password_hash: HashedPassword,
}

/// Partial update. There is deliberately no password field.
#[derive(Debug, Clone, Default)]
pub struct ParticipantChanges {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub phone_number: Option<String>,
}

impl ParticipantChanges {
    pub fn apply(self, participant: &mut Participant) {
        if let Some(name) = self.name {
            participant.name = name;
        }
        if let Some(email) = self.email {
            participant.email = email;
        }
        if let Some(phone_number) = self.phone_number {
            participant.phone_number = Some(phone_number);
        }
    }
}
