mod common;

use athletis_planning::store::PERSONAL_EVENTS_KEY;
use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn demo_week_without_catalog() {
    let app = TestApp::new();

    let (status, body) = app.get_json("/api/calendar?date=2026-10-16").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["events"].as_array().unwrap().len(), 6);
    assert_eq!(body["events"][0]["id"], "event-1");
    assert_eq!(body["week"]["isoWeek"], 42);
    assert_eq!(body["boxes"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn stored_catalog_is_projected() {
    let app = TestApp::new();
    app.get_json("/api/admin/classes").await; // seeds the catalog

    let (_, body) = app.get_json("/api/calendar").await;
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 12);
    assert!(events.iter().all(|e| e["category"] == "cours"));
    assert!(events.iter().any(|e| e["id"] == "1-1-1"));
}

#[tokio::test]
async fn week_navigation() {
    let app = TestApp::new();

    let (_, body) = app
        .get_json("/api/calendar?date=2026-10-16&week=-1")
        .await;
    assert_eq!(body["week"]["isoWeek"], 41);

    let (status, _) = app.get_json("/api/calendar?date=16/10/2026").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn day_view_keeps_only_that_day() {
    let app = TestApp::new();

    let (status, body) = app.get_json("/api/calendar?day=2").await;
    assert_eq!(status, StatusCode::OK);
    let boxes = body["boxes"].as_array().unwrap();
    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0]["eventId"], "event-3");

    let (status, _) = app.get_json("/api/calendar?day=7").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn personal_event_lifecycle() {
    let app = TestApp::new();

    let (status, created) = app
        .send_json(
            "POST",
            "/api/calendar/events",
            json!({
                "title": "Course à pied",
                "day": 3,
                "startTime": "07:00",
                "endTime": "08:00",
                "category": "coaching"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["color"], "green");
    let id = created["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("personal-"));

    let (_, body) = app.get_json("/api/calendar").await;
    assert_eq!(body["events"].as_array().unwrap().len(), 7);

    let res = app
        .request("DELETE", &format!("/api/calendar/events/{id}"), None)
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(app.stored(PERSONAL_EVENTS_KEY), Some(json!([])));

    let res = app
        .request("DELETE", &format!("/api/calendar/events/{id}"), None)
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn class_events_cannot_be_deleted_here() {
    let app = TestApp::new();

    let res = app.request("DELETE", "/api/calendar/events/event-1", None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send_json(
            "POST",
            "/api/calendar/events",
            json!({ "title": "Yoga", "day": 1, "startTime": "09:00", "endTime": "10:00", "category": "cours" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
