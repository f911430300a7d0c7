// src/service/user_service.rs

use crate::api::dto::user_dto::{CreateUserDto, UpdateUserDto, UserDto};
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::repository::team_repository::TeamRepository;
use crate::repository::user_repository::UserRepository;
use crate::utils::error_helper::{not_found_error, validation_error};
use sea_orm::{DbErr, SqlErr};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

pub struct UserService {
    repo: Arc<UserRepository>,
    team_repo: Arc<TeamRepository>,
}

impl UserService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(UserRepository::new(db_pool.clone())),
            team_repo: Arc::new(TeamRepository::new(db_pool)),
        }
    }

    pub async fn list_users(&self) -> AppResult<Vec<UserDto>> {
        let users = self.repo.find_all().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    pub async fn get_user(&self, id: Uuid) -> AppResult<UserDto> {
        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("User", &id.to_string(), "user_service::get_user"))?;
        Ok(user.into())
    }

    pub async fn create_user(&self, payload: CreateUserDto) -> AppResult<UserDto> {
        self.ensure_team_exists(payload.team).await?;
        self.ensure_email_available(payload.email.trim(), None)
            .await?;

        let user = self
            .repo
            .create(payload)
            .await
            .map_err(duplicate_email_to_validation)?;
        info!(user_id = %user.id, team_id = %user.team_id, "User created");
        Ok(user.into())
    }

    pub async fn update_user(&self, id: Uuid, payload: UpdateUserDto) -> AppResult<UserDto> {
        if !self.repo.exists(id).await? {
            return Err(not_found_error(
                "User",
                &id.to_string(),
                "user_service::update_user",
            ));
        }

        if let Some(team_id) = payload.team {
            self.ensure_team_exists(team_id).await?;
        }
        if let Some(email) = &payload.email {
            // 自分自身のメールアドレスを維持するのは重複扱いしない
            self.ensure_email_available(email.trim(), Some(id)).await?;
        }

        let user = self
            .repo
            .update(id, payload)
            .await
            .map_err(duplicate_email_to_validation)?
            .ok_or_else(|| not_found_error("User", &id.to_string(), "user_service::update_user"))?;
        info!(user_id = %user.id, "User updated");
        Ok(user.into())
    }

    /// ユーザーを削除する。記録済みのアクティビティも連鎖削除される
    pub async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        let result = self.repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(not_found_error(
                "User",
                &id.to_string(),
                "user_service::delete_user",
            ));
        }
        info!(user_id = %id, "User deleted");
        Ok(())
    }

    async fn ensure_team_exists(&self, team_id: Uuid) -> AppResult<()> {
        if !self.team_repo.exists(team_id).await? {
            warn!(team_id = %team_id, "User references unknown team");
            return Err(validation_error(
                "team",
                &format!("Invalid pk \"{}\" - object does not exist.", team_id),
            ));
        }
        Ok(())
    }

    async fn ensure_email_available(&self, email: &str, exclude_id: Option<Uuid>) -> AppResult<()> {
        if self.repo.is_email_taken(email, exclude_id).await? {
            warn!(email = %email, "Email already registered");
            return Err(validation_error(
                "email",
                "user with this email already exists.",
            ));
        }
        Ok(())
    }
}

// 事前チェックをすり抜けた同時登録は一意インデックスで弾かれる
fn duplicate_email_to_validation(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            validation_error("email", "user with this email already exists.")
        }
        _ => AppError::from(err),
    }
}
