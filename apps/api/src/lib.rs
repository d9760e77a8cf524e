//! Futsal Board API Library
//!
//! This library provides the core functionality for the five-a-side
//! registration board: the roster domain, the fixed formation, and the
//! HTTP adapter that serves them.

pub mod api;
pub mod config;
pub mod domain;
