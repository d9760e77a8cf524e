use crate::domain::formation::TeamSide;

use super::value_objects::ParticipantId;

/// Domain events raised by the Roster aggregate
///
/// The HTTP adapter only logs them; they are returned so callers can
/// react to a registration without re-reading the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    /// A participant took the next free slot
    ParticipantRegistered {
        participant_id: ParticipantId,
        slot_index: usize,
        team: TeamSide,
    },
    /// The last free slot was taken
    RosterFilled,
}

impl RosterEvent {
    /// Returns the participant this event concerns, if any
    pub fn participant_id(&self) -> Option<ParticipantId> {
        match self {
            RosterEvent::ParticipantRegistered { participant_id, .. } => Some(*participant_id),
            RosterEvent::RosterFilled => None,
        }
    }
}
