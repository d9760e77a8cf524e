use serde::Serialize;

use super::value_objects::{Role, TeamSide, TEAM_SIZE};

/// Number of slots on the whole board
pub const BOARD_SIZE: usize = TEAM_SIZE * 2;

/// A fixed position on the pitch that one participant can occupy
///
/// Slots are static configuration: the Nth registrant always lands in
/// `SLOTS[N]`. Coordinates are percentages of pitch width (`x`) and
/// height (`y`), team A on the left half.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormationSlot {
    pub index: usize,
    pub key: &'static str,
    pub team: TeamSide,
    pub role: Role,
    pub x: f32,
    pub y: f32,
}

/// The ten slots of the board, in assignment order
pub static SLOTS: [FormationSlot; BOARD_SIZE] = [
    slot(0, "teamA-gk", TeamSide::A, Role::Goalkeeper, 5.0, 50.0),
    slot(1, "teamA-def1", TeamSide::A, Role::Defender, 20.0, 30.0),
    slot(2, "teamA-def2", TeamSide::A, Role::Defender, 20.0, 70.0),
    slot(3, "teamA-att1", TeamSide::A, Role::Attacker, 35.0, 35.0),
    slot(4, "teamA-att2", TeamSide::A, Role::Attacker, 35.0, 65.0),
    slot(5, "teamB-gk", TeamSide::B, Role::Goalkeeper, 95.0, 50.0),
    slot(6, "teamB-def1", TeamSide::B, Role::Defender, 80.0, 30.0),
    slot(7, "teamB-def2", TeamSide::B, Role::Defender, 80.0, 70.0),
    slot(8, "teamB-att1", TeamSide::B, Role::Attacker, 65.0, 35.0),
    slot(9, "teamB-att2", TeamSide::B, Role::Attacker, 65.0, 65.0),
];

const fn slot(
    index: usize,
    key: &'static str,
    team: TeamSide,
    role: Role,
    x: f32,
    y: f32,
) -> FormationSlot {
    FormationSlot {
        index,
        key,
        team,
        role,
        x,
        y,
    }
}

impl FormationSlot {
    /// Looks up a slot by its assignment index
    ///
    /// # Example
    /// ```
    /// use futsal_board_api::domain::formation::{FormationSlot, Role, TeamSide};
    ///
    /// let slot = FormationSlot::at(5).expect("slot on the board");
    /// assert_eq!(slot.team, TeamSide::B);
    /// assert_eq!(slot.role, Role::Goalkeeper);
    /// assert!(FormationSlot::at(10).is_none());
    /// ```
    pub fn at(index: usize) -> Option<&'static FormationSlot> {
        SLOTS.get(index)
    }

    /// Iterates over the five slots of one side
    pub fn slots_for(team: TeamSide) -> impl Iterator<Item = &'static FormationSlot> {
        SLOTS[team.slot_range()].iter()
    }

    /// Short role label with its ordinal inside the team, e.g. `Defender 2`
    pub fn label(&self) -> String {
        let ordinal = Self::slots_for(self.team)
            .filter(|s| s.role == self.role && s.index <= self.index)
            .count();

        if self.role == Role::Goalkeeper {
            self.role.to_string()
        } else {
            format!("{} {}", self.role, ordinal)
        }
    }
}
