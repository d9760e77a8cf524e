// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of the HTTP adapter

pub mod formation;
pub mod roster;
