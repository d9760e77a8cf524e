use chrono::{DateTime, Utc};
use serde::Serialize;

use super::value_objects::{ParticipantId, PersonName};

/// A registered player
///
/// Created only by a successful `Roster::register`; never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Participant {
    id: ParticipantId,
    first_name: PersonName,
    last_name: PersonName,
    registered_at: DateTime<Utc>,
}

impl Participant {
    pub(crate) fn new(first_name: PersonName, last_name: PersonName) -> Self {
        Self {
            id: ParticipantId::generate(),
            first_name,
            last_name,
            registered_at: Utc::now(),
        }
    }

    // ===== Getters =====

    pub fn id(&self) -> ParticipantId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// "First Last", as shown on the player card
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
