use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use kernel::id::{EventId, ParticipantId};
use serde_json::{Value, json};

use super::TestApp;

/// One event and one participant, ids returned
async fn seed(app: &TestApp) -> (i64, i64) {
    let event = app.create_event("Meetup", "2030-01-15").await;
    let participant = app.create_participant("Ann", "ann@example.com").await;
    (
        event["id"].as_i64().unwrap(),
        participant["id"].as_i64().unwrap(),
    )
}

async fn register(app: &TestApp, event_id: i64, participant_id: i64) -> Value {
    let token = app.token_for(participant_id as i32);
    app.expect(
        StatusCode::CREATED,
        "POST",
        "/registrations",
        Some(&token),
        Some(json!({ "event_id": event_id, "participant_id": participant_id })),
    )
    .await
}

#[tokio::test]
async fn test_create_registration_needs_token() {
    let app = TestApp::new();
    let (event_id, participant_id) = seed(&app).await;

    app.expect(
        StatusCode::UNAUTHORIZED,
        "POST",
        "/registrations",
        None,
        Some(json!({ "event_id": event_id, "participant_id": participant_id })),
    )
    .await;

    let created = register(&app, event_id, participant_id).await;
    assert_eq!(created["event_id"], event_id);
    assert_eq!(created["participant_id"], participant_id);
    assert!(created["registration_date"].is_string());
    assert!(created.get("event").is_none());
}

#[tokio::test]
async fn test_registration_shows_up_under_event_and_participant() {
    let app = TestApp::new();
    let (event_id, participant_id) = seed(&app).await;
    let registration_id = register(&app, event_id, participant_id).await["id"].clone();

    let by_event = app
        .expect(
            StatusCode::OK,
            "GET",
            &format!("/registrations/event/{}", event_id),
            None,
            None,
        )
        .await;
    let by_event = by_event.as_array().unwrap();
    assert_eq!(by_event.len(), 1);
    assert_eq!(by_event[0]["id"], registration_id);
    assert_eq!(by_event[0]["participant"]["email"], "ann@example.com");
    assert!(by_event[0].get("event").is_none());
    assert!(by_event[0]["participant"].get("password").is_none());

    let by_participant = app
        .expect(
            StatusCode::OK,
            "GET",
            &format!("/registrations/participant/{}", participant_id),
            None,
            None,
        )
        .await;
    let by_participant = by_participant.as_array().unwrap();
    assert_eq!(by_participant.len(), 1);
    assert_eq!(by_participant[0]["id"], registration_id);
    assert_eq!(by_participant[0]["event"]["name"], "Meetup");
    assert!(by_participant[0].get("participant").is_none());
}

#[tokio::test]
async fn test_list_and_get_embed_both_sides() {
    let app = TestApp::new();
    let (event_id, participant_id) = seed(&app).await;
    let id = register(&app, event_id, participant_id).await["id"]
        .as_i64()
        .unwrap();
    let token = app.token_for(1);

    app.expect(StatusCode::UNAUTHORIZED, "GET", "/registrations", None, None)
        .await;

    let list = app
        .expect(StatusCode::OK, "GET", "/registrations", Some(&token), None)
        .await;
    let first = &list.as_array().unwrap()[0];
    assert_eq!(first["event"]["id"], event_id);
    assert_eq!(first["participant"]["id"], participant_id);

    let one = app
        .expect(
            StatusCode::OK,
            "GET",
            &format!("/registrations/{}", id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(one["event"]["name"], "Meetup");
    assert_eq!(one["participant"]["name"], "Ann");

    app.expect(
        StatusCode::NOT_FOUND,
        "GET",
        "/registrations/999",
        Some(&token),
        None,
    )
    .await;
}

#[tokio::test]
async fn test_registrations_since_date() {
    let app = TestApp::new();
    let (event_id, participant_id) = seed(&app).await;
    let event_id = EventId::new(event_id as i32);
    let participant_id = ParticipantId::new(participant_id as i32);

    app.store.insert_registration_at(
        event_id,
        participant_id,
        Utc.with_ymd_and_hms(2024, 12, 31, 23, 0, 0).unwrap(),
    );
    let recent = app.store.insert_registration_at(
        event_id,
        participant_id,
        Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).unwrap(),
    );
    let token = app.token_for(1);

    let since = app
        .expect(
            StatusCode::OK,
            "GET",
            "/registrations/date?date=2025-01-01",
            Some(&token),
            None,
        )
        .await;
    let since = since.as_array().unwrap();
    assert_eq!(since.len(), 1);
    assert_eq!(since[0]["id"], recent.get());
    assert_eq!(since[0]["event"]["name"], "Meetup");
    assert_eq!(since[0]["participant"]["name"], "Ann");

    let all = app
        .expect(
            StatusCode::OK,
            "GET",
            "/registrations/date?date=2024-12-31T22:00:00Z",
            Some(&token),
            None,
        )
        .await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_registrations_since_bad_date_is_400() {
    let app = TestApp::new();
    let token = app.token_for(1);

    app.expect(
        StatusCode::BAD_REQUEST,
        "GET",
        "/registrations/date",
        Some(&token),
        None,
    )
    .await;
    app.expect(
        StatusCode::BAD_REQUEST,
        "GET",
        "/registrations/date?date=yesterday",
        Some(&token),
        None,
    )
    .await;

    app.expect(
        StatusCode::UNAUTHORIZED,
        "GET",
        "/registrations/date?date=2025-01-01",
        None,
        None,
    )
    .await;
}

#[tokio::test]
async fn test_update_registration() {
    let app = TestApp::new();
    let (event_id, participant_id) = seed(&app).await;
    let other_event = app.create_event("Workshop", "2030-02-01").await["id"]
        .as_i64()
        .unwrap();
    let id = register(&app, event_id, participant_id).await["id"]
        .as_i64()
        .unwrap();
    let token = app.token_for(1);

    let updated = app
        .expect(
            StatusCode::OK,
            "PUT",
            &format!("/registrations/{}", id),
            Some(&token),
            Some(json!({ "event_id": other_event })),
        )
        .await;
    assert_eq!(updated["event_id"], other_event);
    assert_eq!(updated["participant_id"], participant_id);

    app.expect(
        StatusCode::INTERNAL_SERVER_ERROR,
        "PUT",
        "/registrations/999",
        Some(&token),
        Some(json!({ "event_id": other_event })),
    )
    .await;
}

#[tokio::test]
async fn test_delete_registration() {
    let app = TestApp::new();
    let (event_id, participant_id) = seed(&app).await;
    let id = register(&app, event_id, participant_id).await["id"]
        .as_i64()
        .unwrap();
    let token = app.token_for(1);

    let body = app
        .expect(
            StatusCode::NO_CONTENT,
            "DELETE",
            &format!("/registrations/{}", id),
            Some(&token),
            None,
        )
        .await;
    assert!(body.is_null());

    let body = app
        .expect(
            StatusCode::INTERNAL_SERVER_ERROR,
            "DELETE",
            &format!("/registrations/{}", id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(body["detail"], "Internal server error");
}

#[tokio::test]
async fn test_deleting_event_drops_its_registrations() {
    let app = TestApp::new();
    let (event_id, participant_id) = seed(&app).await;
    register(&app, event_id, participant_id).await;
    let token = app.token_for(1);

    app.expect(
        StatusCode::NO_CONTENT,
        "DELETE",
        &format!("/events/{}", event_id),
        Some(&token),
        None,
    )
    .await;

    let by_participant = app
        .expect(
            StatusCode::OK,
            "GET",
            &format!("/registrations/participant/{}", participant_id),
            None,
            None,
        )
        .await;
    assert!(by_participant.as_array().unwrap().is_empty());
}
