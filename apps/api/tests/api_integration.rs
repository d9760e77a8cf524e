//! End-to-end API integration tests
//!
//! These tests drive the board router in-process and verify:
//! - Board snapshot and per-slot / per-team views
//! - Registration success, validation refusals, and the capacity lock
//! - JSON error bodies

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use futsal_board_api::api::{router, AppState};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot

/// Setup test application around a fresh board
fn setup_app() -> Router {
    router(AppState::new())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn register(app: &Router, first_name: &str, last_name: &str) -> (StatusCode, Value) {
    let payload = json!({
        "first_name": first_name,
        "last_name": last_name,
    });

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/registrations")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_empty_board() {
    let app = setup_app();

    let (status, board) = get(&app, "/api/board").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(board["registered"], 0);
    assert_eq!(board["capacity"], 10);
    assert_eq!(board["remaining_slots"], 10);
    assert_eq!(board["is_full"], false);
    assert_eq!(board["accepts_registrations"], true);
    assert_eq!(board["slots"].as_array().unwrap().len(), 10);
    assert!(board["slots"][0]["occupant"].is_null());
    assert_eq!(board["teams"][0]["label"], "Team A");
    assert_eq!(board["teams"][0]["count"], 0);
}

#[tokio::test]
async fn test_register_two_players() {
    let app = setup_app();

    let (status, json) = register(&app, "Alice", "Martin").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["participant"]["first_name"], "Alice");
    assert_eq!(json["slot"]["key"], "teamA-gk");
    assert_eq!(json["slot"]["role"], "goalkeeper");
    assert_eq!(json["remaining_slots"], 9);

    let (status, json) = register(&app, "  Bob ", "Durand  ").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["participant"]["display_name"], "Bob Durand");
    assert_eq!(json["slot"]["key"], "teamA-def1");

    let (_, board) = get(&app, "/api/board").await;
    assert_eq!(board["remaining_slots"], 8);
    assert_eq!(board["slots"][0]["occupant"]["first_name"], "Alice");
    assert_eq!(board["slots"][1]["occupant"]["last_name"], "Durand");
    assert!(board["slots"][2]["occupant"].is_null());
    assert_eq!(board["teams"][0]["count"], 2);
    assert_eq!(board["teams"][1]["count"], 0);
    assert_eq!(board["participants"][1]["number"], 2);
}

#[tokio::test]
async fn test_register_blank_names_refused() {
    let app = setup_app();

    let (status, json) = register(&app, "", "Smith").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "The first name cannot be empty");

    let (status, json) = register(&app, "John", "   ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "The last name cannot be empty");

    let (_, board) = get(&app, "/api/board").await;
    assert_eq!(board["registered"], 0);
}

#[tokio::test]
async fn test_full_board_refuses_registration() {
    let app = setup_app();

    for i in 0..10 {
        let (status, _) = register(&app, &format!("Player{}", i), "Five").await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, board) = get(&app, "/api/board").await;
    assert_eq!(board["is_full"], true);
    assert_eq!(board["accepts_registrations"], false);
    assert_eq!(board["remaining_slots"], 0);
    assert_eq!(board["teams"][1]["count"], 5);

    let (status, json) = register(&app, "Late", "Comer").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "The board is full (10/10 players)");

    let (_, board) = get(&app, "/api/board").await;
    assert_eq!(board["registered"], 10);
}

#[tokio::test]
async fn test_get_slot() {
    let app = setup_app();
    register(&app, "Alice", "Martin").await;

    let (status, slot) = get(&app, "/api/slots/0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slot["occupant"]["display_name"], "Alice Martin");

    let (status, slot) = get(&app, "/api/slots/7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slot["team"], "b");
    assert_eq!(slot["label"], "Defender 2");
    assert!(slot["occupant"].is_null());
}

#[tokio::test]
async fn test_get_slot_off_the_board() {
    let app = setup_app();

    let (status, json) = get(&app, "/api/slots/10").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Slot not found: 10");
}

#[tokio::test]
async fn test_get_team() {
    let app = setup_app();
    for i in 0..6 {
        register(&app, &format!("Player{}", i), "Five").await;
    }

    let (status, team) = get(&app, "/api/teams/b").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(team["count"], 1);
    assert_eq!(team["size"], 5);
    assert_eq!(team["slots"][0]["occupant"]["first_name"], "Player5");
    assert!(team["slots"][1]["occupant"].is_null());
}

#[tokio::test]
async fn test_get_unknown_team() {
    let app = setup_app();

    let (status, _) = get(&app, "/api/teams/c").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
