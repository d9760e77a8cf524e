use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::formation::{FormationSlot, Role, TeamSide, TEAM_SIZE};
use crate::domain::roster::{Participant, Roster};

/// A registered participant as exposed over HTTP
#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub registered_at: DateTime<Utc>,
}

impl From<&Participant> for ParticipantResponse {
    fn from(participant: &Participant) -> Self {
        Self {
            id: participant.id().as_uuid(),
            first_name: participant.first_name().to_string(),
            last_name: participant.last_name().to_string(),
            display_name: participant.display_name(),
            registered_at: participant.registered_at(),
        }
    }
}

/// One formation slot and whoever holds it
#[derive(Debug, Serialize)]
pub struct SlotResponse {
    pub index: usize,
    pub key: &'static str,
    pub team: TeamSide,
    pub role: Role,
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub occupant: Option<ParticipantResponse>,
}

impl SlotResponse {
    pub fn new(slot: &FormationSlot, occupant: Option<&Participant>) -> Self {
        Self {
            index: slot.index,
            key: slot.key,
            team: slot.team,
            role: slot.role,
            label: slot.label(),
            x: slot.x,
            y: slot.y,
            occupant: occupant.map(ParticipantResponse::from),
        }
    }
}

/// Fill level and slots of one side
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub team: TeamSide,
    pub label: &'static str,
    pub count: usize,
    pub size: usize,
    pub slots: Vec<SlotResponse>,
}

impl TeamResponse {
    fn new(roster: &Roster, team: TeamSide) -> Self {
        Self {
            team,
            label: team.label(),
            count: roster.team_count(team),
            size: TEAM_SIZE,
            slots: FormationSlot::slots_for(team)
                .map(|slot| SlotResponse::new(slot, roster.occupant_of(slot.index)))
                .collect(),
        }
    }
}

/// Entry of the numbered participant list
#[derive(Debug, Serialize)]
pub struct ListedParticipant {
    pub number: usize,
    pub slot_key: &'static str,
    #[serde(flatten)]
    pub participant: ParticipantResponse,
}

/// Team fill level without slot detail
#[derive(Debug, Serialize)]
pub struct TeamSummary {
    pub team: TeamSide,
    pub label: &'static str,
    pub count: usize,
    pub size: usize,
}

/// Full board snapshot
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub registered: usize,
    pub capacity: usize,
    pub remaining_slots: usize,
    pub is_full: bool,
    pub accepts_registrations: bool,
    pub teams: Vec<TeamSummary>,
    pub slots: Vec<SlotResponse>,
    pub participants: Vec<ListedParticipant>,
}

impl From<&Roster> for BoardResponse {
    fn from(roster: &Roster) -> Self {
        let teams = TeamSide::ALL
            .into_iter()
            .map(|team| TeamSummary {
                team,
                label: team.label(),
                count: roster.team_count(team),
                size: TEAM_SIZE,
            })
            .collect();

        let slots = roster
            .slot_assignments()
            .map(|(slot, occupant)| SlotResponse::new(slot, occupant))
            .collect();

        let participants = roster
            .slot_assignments()
            .filter_map(|(slot, occupant)| {
                occupant.map(|participant| ListedParticipant {
                    number: slot.index + 1,
                    slot_key: slot.key,
                    participant: ParticipantResponse::from(participant),
                })
            })
            .collect();

        Self {
            registered: roster.len(),
            capacity: Roster::CAPACITY,
            remaining_slots: roster.remaining_slots(),
            is_full: roster.is_full(),
            accepts_registrations: !roster.is_full(),
            teams,
            slots,
            participants,
        }
    }
}

/// Get the whole board
///
/// GET /api/board
pub async fn get_board(State(state): State<AppState>) -> Json<BoardResponse> {
    let roster = state.roster().read().await;
    Json(BoardResponse::from(&*roster))
}

/// Get one slot and its occupant
///
/// GET /api/slots/:index
pub async fn get_slot(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<SlotResponse>, ApiError> {
    let slot = FormationSlot::at(index)
        .ok_or_else(|| ApiError::not_found(format!("Slot not found: {}", index)))?;

    let roster = state.roster().read().await;
    Ok(Json(SlotResponse::new(slot, roster.occupant_of(index))))
}

/// Get one team with its slots
///
/// GET /api/teams/:team
pub async fn get_team(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team: TeamSide = team.parse().map_err(ApiError::not_found)?;

    let roster = state.roster().read().await;
    Ok(Json(TeamResponse::new(&roster, team)))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
