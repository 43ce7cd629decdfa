//! Identity
//!
//! What a session token asserts about its holder.

use kernel::id::ParticipantId;
use serde::{Deserialize, Serialize};

/// Token payload: `{ "id": .., "email": .. }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: ParticipantId,
    pub email: String,
}

impl From<&super::credential::Credential> for Identity {
    fn from(credential: &super::credential::Credential) -> Self {
        Self {
            id: credential.participant_id,
            email: credential.email.as_str().to_string(),
        }
    }
}
