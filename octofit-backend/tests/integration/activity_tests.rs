// tests/integration/activity_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::common::{app_helper, request, test_data};

#[tokio::test]
async fn test_create_and_retrieve_activity() {
    let (app, _db) = app_helper::setup_app().await;
    let (_team, user) = test_data::create_team_with_user(&app).await;
    let user_id = test_data::id_of(&user);

    let activity = test_data::create_activity(&app, &user_id, "Running", 10).await;
    assert_eq!(activity["type"], "Running");
    assert_eq!(activity["user"], user_id.as_str());
    assert!(activity["timestamp"].is_string());

    let (status, body) = request::get(
        &app,
        &format!("/api/activities/{}/", test_data::id_of(&activity)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["duration"], 10);
    assert!(body.get("activity_type").is_none());
}

#[tokio::test]
async fn test_explicit_timestamp_is_kept() {
    let (app, _db) = app_helper::setup_app().await;
    let (_team, user) = test_data::create_team_with_user(&app).await;

    let (status, body) = request::post(
        &app,
        "/api/activities/",
        &json!({
            "user": test_data::id_of(&user),
            "type": "Cycling",
            "duration": 45,
            "timestamp": "2025-08-01T07:30:00Z"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let timestamp: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(body["timestamp"].clone()).unwrap();
    assert_eq!(timestamp.to_rfc3339(), "2025-08-01T07:30:00+00:00");
}

#[tokio::test]
async fn test_unknown_user_is_rejected() {
    let (app, _db) = app_helper::setup_app().await;

    let (status, body) = request::post(
        &app,
        "/api/activities/",
        &json!({ "user": Uuid::new_v4(), "type": "Running", "duration": 10 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().starts_with("user:"));
}

#[tokio::test]
async fn test_non_integer_duration_is_rejected() {
    let (app, _db) = app_helper::setup_app().await;
    let (_team, user) = test_data::create_team_with_user(&app).await;

    let (status, _) = request::post(
        &app,
        "/api/activities/",
        &json!({ "user": test_data::id_of(&user), "type": "Running", "duration": "ten" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_negative_duration_is_rejected() {
    let (app, _db) = app_helper::setup_app().await;
    let (_team, user) = test_data::create_team_with_user(&app).await;

    let (status, body) = request::post(
        &app,
        "/api/activities/",
        &json!({ "user": test_data::id_of(&user), "type": "Running", "duration": -1 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["validation_errors"]["duration"].is_array());
}

#[tokio::test]
async fn test_patch_activity_duration() {
    let (app, _db) = app_helper::setup_app().await;
    let (_team, user) = test_data::create_team_with_user(&app).await;
    let activity = test_data::create_activity(&app, &test_data::id_of(&user), "Swimming", 30).await;

    let (status, body) = request::patch(
        &app,
        &format!("/api/activities/{}/", test_data::id_of(&activity)),
        &json!({ "duration": 60 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["duration"], 60);
    assert_eq!(body["type"], "Swimming");
    assert_eq!(body["timestamp"], activity["timestamp"]);
}

#[tokio::test]
async fn test_put_activity_requires_type() {
    let (app, _db) = app_helper::setup_app().await;
    let (_team, user) = test_data::create_team_with_user(&app).await;
    let user_id = test_data::id_of(&user);
    let activity = test_data::create_activity(&app, &user_id, "Swimming", 30).await;

    let (status, _) = request::put(
        &app,
        &format!("/api/activities/{}/", test_data::id_of(&activity)),
        &json!({ "user": user_id, "duration": 15 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_then_retrieve_activity() {
    let (app, _db) = app_helper::setup_app().await;
    let (_team, user) = test_data::create_team_with_user(&app).await;
    let activity = test_data::create_activity(&app, &test_data::id_of(&user), "Yoga", 20).await;
    let uri = format!("/api/activities/{}/", test_data::id_of(&activity));

    let (status, _) = request::delete(&app, &uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = request::get(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
