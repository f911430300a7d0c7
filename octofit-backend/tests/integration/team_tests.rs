// tests/integration/team_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::common::{app_helper, request, test_data};

#[tokio::test]
async fn test_create_and_retrieve_team() {
    let (app, _db) = app_helper::setup_app().await;

    let team = test_data::create_team(&app, "Test Team").await;
    assert_eq!(team["name"], "Test Team");
    assert!(team["created_at"].is_string());
    assert!(team["updated_at"].is_string());

    let id = test_data::id_of(&team);
    let (status, body) = request::get(&app, &format!("/api/teams/{}/", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["name"], "Test Team");
}

#[tokio::test]
async fn test_list_teams() {
    let (app, _db) = app_helper::setup_app().await;

    let (status, body) = request::get(&app, "/api/teams/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    test_data::create_team(&app, "Marvel").await;
    test_data::create_team(&app, "DC").await;

    let (status, body) = request::get(&app, "/api/teams/").await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Marvel"));
    assert!(names.contains(&"DC"));
}

#[tokio::test]
async fn test_create_team_without_name_fails() {
    let (app, _db) = app_helper::setup_app().await;

    let (status, body) = request::post(&app, "/api/teams/", &json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error_type"], "validation_error");
}

#[tokio::test]
async fn test_create_team_with_blank_name_fails() {
    let (app, _db) = app_helper::setup_app().await;

    let (status, body) = request::post(&app, "/api/teams/", &json!({ "name": "   " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "validation_errors");
    assert!(body["validation_errors"]["name"].is_array());
}

#[tokio::test]
async fn test_put_replaces_team() {
    let (app, _db) = app_helper::setup_app().await;
    let team = test_data::create_team(&app, "Old Name").await;
    let id = test_data::id_of(&team);

    let (status, body) = request::put(
        &app,
        &format!("/api/teams/{}/", id),
        &json!({ "name": "New Name" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "New Name");
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["created_at"], team["created_at"]);
}

#[tokio::test]
async fn test_put_requires_all_fields() {
    let (app, _db) = app_helper::setup_app().await;
    let team = test_data::create_team(&app, "Team").await;

    let (status, _) = request::put(
        &app,
        &format!("/api/teams/{}/", test_data::id_of(&team)),
        &json!({}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_with_empty_body_keeps_team() {
    let (app, _db) = app_helper::setup_app().await;
    let team = test_data::create_team(&app, "Unchanged").await;

    let (status, body) = request::patch(
        &app,
        &format!("/api/teams/{}/", test_data::id_of(&team)),
        &json!({}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Unchanged");
}

#[tokio::test]
async fn test_patch_with_null_name_is_rejected() {
    let (app, _db) = app_helper::setup_app().await;
    let team = test_data::create_team(&app, "Test Team").await;
    let uri = format!("/api/teams/{}/", test_data::id_of(&team));

    let (status, body) = request::patch(&app, &uri, &json!({ "name": null })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "validation_error");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("name"), "{}", message);
    assert!(message.contains("may not be null"), "{}", message);

    let (_, stored) = request::get(&app, &uri).await;
    assert_eq!(stored["name"], "Test Team");
}

#[tokio::test]
async fn test_update_missing_team_returns_404() {
    let (app, _db) = app_helper::setup_app().await;

    let (status, body) = request::put(
        &app,
        &format!("/api/teams/{}/", Uuid::new_v4()),
        &json!({ "name": "Ghost" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "not_found");
}

#[tokio::test]
async fn test_delete_then_retrieve_team() {
    let (app, _db) = app_helper::setup_app().await;
    let team = test_data::create_team(&app, "Short Lived").await;
    let uri = format!("/api/teams/{}/", test_data::id_of(&team));

    let (status, body) = request::delete(&app, &uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = request::get(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request::delete(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
