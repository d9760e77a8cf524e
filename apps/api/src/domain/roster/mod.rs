// Roster domain module
// Contains the roster aggregate root, participants, value objects, and domain events

#![allow(clippy::module_inception)]

pub mod errors;
pub mod events;
pub mod participant;
pub mod roster;
pub mod value_objects;

// Re-export main types for convenience
pub use errors::RegistrationError;
pub use events::RosterEvent;
pub use participant::Participant;
pub use roster::Roster;
pub use value_objects::{NameField, ParticipantId, PersonName};
