use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::handlers::board::{ParticipantResponse, SlotResponse};
use crate::api::state::AppState;
use crate::domain::roster::RosterEvent;

/// Request body for a registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
}

/// Response from a successful registration
#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub participant: ParticipantResponse,
    pub slot: SlotResponse,
    pub remaining_slots: usize,
    pub is_full: bool,
}

/// Register a participant in the next free slot
///
/// POST /api/registrations
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegistrationResponse>), ApiError> {
    let mut roster = state.roster().write().await;

    let (participant, events) = roster
        .register(&req.first_name, &req.last_name)
        .map_err(|e| {
            tracing::warn!(error = %e, "Registration refused");
            ApiError::from(e)
        })?;

    for event in &events {
        match event {
            RosterEvent::ParticipantRegistered {
                participant_id,
                slot_index,
                team,
            } => {
                tracing::info!(%participant_id, slot_index, %team, "Participant registered");
            }
            RosterEvent::RosterFilled => {
                tracing::info!("Board is full");
            }
        }
    }

    let slot = roster.slot_of(participant.id()).ok_or_else(|| {
        ApiError::internal_server_error(format!("No slot for participant {}", participant.id()))
    })?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse {
            slot: SlotResponse::new(slot, Some(&participant)),
            participant: ParticipantResponse::from(&participant),
            remaining_slots: roster.remaining_slots(),
            is_full: roster.is_full(),
        }),
    ))
}
