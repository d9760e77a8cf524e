// Formation domain module
// Fixed 1-2-2 layout on each half of the pitch; configuration, not state

pub mod slot;
pub mod value_objects;

pub use slot::{FormationSlot, BOARD_SIZE, SLOTS};
pub use value_objects::{Role, TeamSide, TEAM_SIZE};
