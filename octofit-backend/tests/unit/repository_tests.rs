// tests/unit/repository_tests.rs

use octofit_backend::api::dto::activity_dto::CreateActivityDto;
use octofit_backend::api::dto::team_dto::{CreateTeamDto, UpdateTeamDto};
use octofit_backend::api::dto::user_dto::{CreateUserDto, UpdateUserDto};
use octofit_backend::repository::activity_repository::ActivityRepository;
use octofit_backend::repository::team_repository::TeamRepository;
use octofit_backend::repository::user_repository::UserRepository;
use uuid::Uuid;

use crate::common::db::TestDatabase;

#[tokio::test]
async fn test_team_repository_crud() {
    let db = TestDatabase::new().await;
    let repo = TeamRepository::new(db.connection.clone());

    let team = repo
        .create(CreateTeamDto {
            name: "  Repo Team  ".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(team.name, "Repo Team");
    assert_eq!(team.created_at, team.updated_at);
    assert!(repo.exists(team.id).await.unwrap());

    let updated = repo
        .update(
            team.id,
            UpdateTeamDto {
                name: Some("Renamed".to_string()),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Renamed");
    assert!(updated.updated_at >= team.updated_at);

    let result = repo.delete(team.id).await.unwrap();
    assert_eq!(result.rows_affected, 1);
    assert!(repo.find_by_id(team.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_missing_team_returns_none() {
    let db = TestDatabase::new().await;
    let repo = TeamRepository::new(db.connection.clone());

    let result = repo
        .update(Uuid::new_v4(), UpdateTeamDto::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_is_email_taken_excludes_self() {
    let db = TestDatabase::new().await;
    let team_repo = TeamRepository::new(db.connection.clone());
    let user_repo = UserRepository::new(db.connection.clone());

    let team = team_repo
        .create(CreateTeamDto {
            name: "Team".to_string(),
        })
        .await
        .unwrap();
    let user = user_repo
        .create(CreateUserDto {
            name: "Owner".to_string(),
            email: "owner@example.com".to_string(),
            team: team.id,
        })
        .await
        .unwrap();

    assert!(user_repo
        .is_email_taken("owner@example.com", None)
        .await
        .unwrap());
    assert!(!user_repo
        .is_email_taken("owner@example.com", Some(user.id))
        .await
        .unwrap());
    assert!(!user_repo
        .is_email_taken("nobody@example.com", None)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_unique_index_rejects_duplicate_email() {
    let db = TestDatabase::new().await;
    let team_repo = TeamRepository::new(db.connection.clone());
    let user_repo = UserRepository::new(db.connection.clone());

    let team = team_repo
        .create(CreateTeamDto {
            name: "Team".to_string(),
        })
        .await
        .unwrap();
    let payload = CreateUserDto {
        name: "Twin".to_string(),
        email: "twin@example.com".to_string(),
        team: team.id,
    };

    user_repo.create(payload.clone()).await.unwrap();
    let err = user_repo.create(payload).await.unwrap_err();

    let app_err = octofit_backend::error::AppError::from(err);
    assert!(app_err.is_validation());
}

#[tokio::test]
async fn test_user_and_activity_keep_owner_references() {
    let db = TestDatabase::new().await;
    let team_repo = TeamRepository::new(db.connection.clone());
    let user_repo = UserRepository::new(db.connection.clone());
    let activity_repo = ActivityRepository::new(db.connection.clone());

    let team = team_repo
        .create(CreateTeamDto {
            name: "Team".to_string(),
        })
        .await
        .unwrap();
    let user = user_repo
        .create(CreateUserDto {
            name: "Runner".to_string(),
            email: "runner@example.com".to_string(),
            team: team.id,
        })
        .await
        .unwrap();
    activity_repo
        .create(CreateActivityDto {
            user: user.id,
            activity_type: "Running".to_string(),
            duration: 30,
            timestamp: None,
        })
        .await
        .unwrap();

    let members = user_repo.find_all().await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].team_id, team.id);

    let activities = activity_repo.find_all().await.unwrap();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].user_id, user.id);
    assert_eq!(activities[0].duration, 30);

    let moved = user_repo
        .update(
            user.id,
            UpdateUserDto {
                name: Some("Sprinter".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.name, "Sprinter");
    assert_eq!(moved.email, "runner@example.com");
}
