// tests/unit/service_tests.rs

use octofit_backend::api::dto::leaderboard_dto::{CreateLeaderboardDto, UpdateLeaderboardDto};
use octofit_backend::api::dto::team_dto::CreateTeamDto;
use octofit_backend::api::dto::user_dto::{CreateUserDto, UpdateUserDto};
use octofit_backend::api::dto::workout_dto::{CreateWorkoutDto, UpdateWorkoutDto};
use uuid::Uuid;

use crate::common::app_helper;

#[tokio::test]
async fn test_team_service_delete_missing_team_is_not_found() {
    let (state, _db) = app_helper::setup_state().await;

    let err = state
        .team_service
        .delete_team(Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_user_service_rejects_duplicate_email() {
    let (state, _db) = app_helper::setup_state().await;
    let team = state
        .team_service
        .create_team(CreateTeamDto {
            name: "Team".to_string(),
        })
        .await
        .unwrap();

    let payload = CreateUserDto {
        name: "First".to_string(),
        email: "same@example.com".to_string(),
        team: team.id,
    };
    state.user_service.create_user(payload.clone()).await.unwrap();

    let err = state.user_service.create_user(payload).await.unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_user_service_update_checks_existence_first() {
    let (state, _db) = app_helper::setup_state().await;

    let err = state
        .user_service
        .update_user(
            Uuid::new_v4(),
            UpdateUserDto {
                team: Some(Uuid::new_v4()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_leaderboard_service_update_rejects_unknown_team() {
    let (state, _db) = app_helper::setup_state().await;
    let team = state
        .team_service
        .create_team(CreateTeamDto {
            name: "Team".to_string(),
        })
        .await
        .unwrap();
    let entry = state
        .leaderboard_service
        .create_entry(CreateLeaderboardDto {
            team: team.id,
            points: 10,
        })
        .await
        .unwrap();

    let err = state
        .leaderboard_service
        .update_entry(
            entry.id,
            UpdateLeaderboardDto {
                team: Some(Uuid::new_v4()),
                points: None,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let unchanged = state.leaderboard_service.get_entry(entry.id).await.unwrap();
    assert_eq!(unchanged.team, team.id);
    assert_eq!(unchanged.points, 10);
}

#[tokio::test]
async fn test_workout_service_roundtrip() {
    let (state, _db) = app_helper::setup_state().await;

    let workout = state
        .workout_service
        .create_workout(CreateWorkoutDto {
            name: "Push-ups".to_string(),
            description: "Upper body".to_string(),
            suggested_for: "Beginners".to_string(),
        })
        .await
        .unwrap();

    let updated = state
        .workout_service
        .update_workout(
            workout.id,
            UpdateWorkoutDto {
                suggested_for: Some("Everyone".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Push-ups");
    assert_eq!(updated.suggested_for, "Everyone");

    state.workout_service.delete_workout(workout.id).await.unwrap();
    let err = state
        .workout_service
        .get_workout(workout.id)
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = state
        .workout_service
        .delete_workout(workout.id)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}
