// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};

pub use state::AppState;

/// Builds the board router without middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::board::health_check))
        // Board views
        .route("/api/board", get(handlers::board::get_board))
        .route("/api/slots/:index", get(handlers::board::get_slot))
        .route("/api/teams/:team", get(handlers::board::get_team))
        // Registration
        .route(
            "/api/registrations",
            post(handlers::registrations::register),
        )
        .with_state(state)
}
