use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Number of slots on each side of the pitch
pub const TEAM_SIZE: usize = 5;

/// One of the two halves of the board
///
/// Team A owns slot indices `0..5`, team B owns `5..10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    A,
    B,
}

impl TeamSide {
    /// Both sides, in slot order
    pub const ALL: [TeamSide; 2] = [TeamSide::A, TeamSide::B];

    /// Returns the range of slot indices owned by this side
    ///
    /// # Example
    /// ```
    /// use futsal_board_api::domain::formation::TeamSide;
    ///
    /// assert_eq!(TeamSide::A.slot_range(), 0..5);
    /// assert_eq!(TeamSide::B.slot_range(), 5..10);
    /// ```
    pub fn slot_range(&self) -> Range<usize> {
        match self {
            TeamSide::A => 0..TEAM_SIZE,
            TeamSide::B => TEAM_SIZE..TEAM_SIZE * 2,
        }
    }

    /// Returns the side owning a slot index, if the index is on the board
    pub fn of_slot(index: usize) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|team| team.slot_range().contains(&index))
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            TeamSide::A => "Team A",
            TeamSide::B => "Team B",
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamSide::A => write!(f, "a"),
            TeamSide::B => write!(f, "b"),
        }
    }
}

impl FromStr for TeamSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(TeamSide::A),
            "b" => Ok(TeamSide::B),
            other => Err(format!("Unknown team: {}", other)),
        }
    }
}

/// Playing role of a formation slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Goalkeeper,
    Defender,
    Attacker,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Goalkeeper => write!(f, "Goalkeeper"),
            Role::Defender => write!(f, "Defender"),
            Role::Attacker => write!(f, "Attacker"),
        }
    }
}
