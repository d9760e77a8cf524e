use super::errors::{RegistrationError, RegistrationResult};
use super::events::RosterEvent;
use super::participant::Participant;
use super::value_objects::{NameField, ParticipantId, PersonName};
use crate::domain::formation::{FormationSlot, TeamSide, BOARD_SIZE, SLOTS};

/// Roster aggregate root
///
/// Insertion-ordered list of the players registered on the board. The Nth
/// participant occupies `SLOTS[N]`; slots 0-4 are team A, 5-9 team B.
///
/// # Invariants
/// - Never holds more than `Roster::CAPACITY` participants
/// - Only grows; participants are never edited or removed
/// - A refused registration leaves the roster untouched
///
/// # Example
/// ```
/// use futsal_board_api::domain::formation::TeamSide;
/// use futsal_board_api::domain::roster::Roster;
///
/// let mut roster = Roster::new();
/// let (alice, events) = roster.register("Alice", "Martin").expect("free slot");
///
/// assert_eq!(roster.remaining_slots(), 9);
/// assert_eq!(roster.occupant_of(0), Some(&alice));
/// assert_eq!(roster.team_count(TeamSide::A), 1);
/// assert_eq!(events.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Maximum number of participants on the board
    pub const CAPACITY: usize = BOARD_SIZE;

    /// Creates an empty roster
    pub fn new() -> Self {
        Self {
            participants: Vec::with_capacity(Self::CAPACITY),
        }
    }

    /// Registers a participant in the next free slot
    ///
    /// # Returns
    /// * `Ok((Participant, Vec<RosterEvent>))` - The new participant and the events raised
    /// * `Err(RegistrationError)` - If the board is full or a name is blank
    ///
    /// # Business Rules Enforced
    /// - A full board refuses every registration, whatever the names
    /// - Both names must be non-empty after trimming
    /// - Names are stored trimmed
    /// - Taking the last slot also raises `RosterFilled`
    pub fn register(
        &mut self,
        first_name: &str,
        last_name: &str,
    ) -> RegistrationResult<(Participant, Vec<RosterEvent>)> {
        if self.is_full() {
            return Err(RegistrationError::CapacityExceeded {
                capacity: Self::CAPACITY,
            });
        }

        let first_name = PersonName::new(first_name).ok_or(RegistrationError::InvalidName {
            field: NameField::FirstName,
        })?;
        let last_name = PersonName::new(last_name).ok_or(RegistrationError::InvalidName {
            field: NameField::LastName,
        })?;

        let slot_index = self.participants.len();
        let participant = Participant::new(first_name, last_name);
        self.participants.push(participant.clone());

        let mut events = vec![RosterEvent::ParticipantRegistered {
            participant_id: participant.id(),
            slot_index,
            team: SLOTS[slot_index].team,
        }];
        if self.is_full() {
            events.push(RosterEvent::RosterFilled);
        }

        Ok((participant, events))
    }

    // ===== Derived views =====

    /// Number of registered participants
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Participants in registration order
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Free slots left on the board
    pub fn remaining_slots(&self) -> usize {
        Self::CAPACITY - self.participants.len()
    }

    /// True once every slot is taken
    pub fn is_full(&self) -> bool {
        self.participants.len() >= Self::CAPACITY
    }

    /// Number of participants placed on one side
    pub fn team_count(&self, team: TeamSide) -> usize {
        team.slot_range()
            .filter(|&index| index < self.participants.len())
            .count()
    }

    /// Participant occupying a slot, `None` when the slot is open
    /// or the index is off the board
    pub fn occupant_of(&self, slot_index: usize) -> Option<&Participant> {
        self.participants.get(slot_index)
    }

    /// Every formation slot paired with its occupant
    pub fn slot_assignments(
        &self,
    ) -> impl Iterator<Item = (&'static FormationSlot, Option<&Participant>)> + '_ {
        SLOTS
            .iter()
            .map(move |slot| (slot, self.occupant_of(slot.index)))
    }

    /// Slot held by a participant
    pub fn slot_of(&self, participant_id: ParticipantId) -> Option<&'static FormationSlot> {
        self.participants
            .iter()
            .position(|p| p.id() == participant_id)
            .and_then(FormationSlot::at)
    }
}
