// HTTP handlers for the board

pub mod board;
pub mod registrations;
