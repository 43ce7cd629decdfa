//! Credential Entity
//!
//! The slice of a participant row that login needs.

use kernel::id::ParticipantId;
use platform::password::{ClearTextPassword, HashedPassword};

use crate::domain::value_object::email::Email;

/// Login credentials of one participant
#[derive(Debug, Clone)]
pub struct Credential {
    pub participant_id: ParticipantId,
    pub email: Email,
    pub password_hash: HashedPassword,
}

impl Credential {
    pub fn matches(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        self.password_hash.verify(password, pepper)
    }
}
