// tests/integration/relation_tests.rs

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{app_helper, request, test_data};

fn len(body: &Value) -> usize {
    body.as_array().map_or(0, Vec::len)
}

#[tokio::test]
async fn test_deleting_team_cascades_to_users_and_leaderboard() {
    let (app, _db) = app_helper::setup_app().await;
    let (team, user) = test_data::create_team_with_user(&app).await;
    let team_id = test_data::id_of(&team);
    test_data::create_leaderboard_entry(&app, &team_id, 100).await;
    test_data::create_activity(&app, &test_data::id_of(&user), "Running", 5).await;

    let other_team = test_data::create_team(&app, "Survivors").await;
    test_data::create_user(
        &app,
        "Survivor",
        &test_data::unique_email("survivor"),
        &test_data::id_of(&other_team),
    )
    .await;

    let (status, _) = request::delete(&app, &format!("/api/teams/{}/", team_id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, users) = request::get(&app, "/api/users/").await;
    assert_eq!(len(&users), 1);
    assert_eq!(users[0]["name"], "Survivor");

    let (_, entries) = request::get(&app, "/api/leaderboard/").await;
    assert_eq!(len(&entries), 0);

    let (_, activities) = request::get(&app, "/api/activities/").await;
    assert_eq!(len(&activities), 0);
}

#[tokio::test]
async fn test_deleting_user_cascades_to_activities() {
    let (app, _db) = app_helper::setup_app().await;
    let (team, user) = test_data::create_team_with_user(&app).await;
    test_data::create_activity(&app, &test_data::id_of(&user), "Walking", 15).await;
    test_data::create_activity(&app, &test_data::id_of(&user), "Rowing", 25).await;

    let (status, _) =
        request::delete(&app, &format!("/api/users/{}/", test_data::id_of(&user))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, activities) = request::get(&app, "/api/activities/").await;
    assert_eq!(len(&activities), 0);

    // チームは残る
    let (status, _) =
        request::get(&app, &format!("/api/teams/{}/", test_data::id_of(&team))).await;
    assert_eq!(status, StatusCode::OK);
}
