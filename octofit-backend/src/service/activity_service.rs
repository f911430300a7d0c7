// src/service/activity_service.rs

use crate::api::dto::activity_dto::{ActivityDto, CreateActivityDto, UpdateActivityDto};
use crate::db::DbPool;
use crate::error::AppResult;
use crate::repository::activity_repository::ActivityRepository;
use crate::repository::user_repository::UserRepository;
use crate::utils::error_helper::{not_found_error, validation_error};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

pub struct ActivityService {
    repo: Arc<ActivityRepository>,
    user_repo: Arc<UserRepository>,
}

impl ActivityService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(ActivityRepository::new(db_pool.clone())),
            user_repo: Arc::new(UserRepository::new(db_pool)),
        }
    }

    pub async fn list_activities(&self) -> AppResult<Vec<ActivityDto>> {
        let activities = self.repo.find_all().await?;
        Ok(activities.into_iter().map(Into::into).collect())
    }

    pub async fn get_activity(&self, id: Uuid) -> AppResult<ActivityDto> {
        let activity = self.repo.find_by_id(id).await?.ok_or_else(|| {
            not_found_error("Activity", &id.to_string(), "activity_service::get_activity")
        })?;
        Ok(activity.into())
    }

    pub async fn create_activity(&self, payload: CreateActivityDto) -> AppResult<ActivityDto> {
        self.ensure_user_exists(payload.user).await?;

        let activity = self.repo.create(payload).await?;
        info!(
            activity_id = %activity.id,
            user_id = %activity.user_id,
            activity_type = %activity.activity_type,
            duration = activity.duration,
            "Activity recorded"
        );
        Ok(activity.into())
    }

    pub async fn update_activity(
        &self,
        id: Uuid,
        payload: UpdateActivityDto,
    ) -> AppResult<ActivityDto> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(not_found_error(
                "Activity",
                &id.to_string(),
                "activity_service::update_activity",
            ));
        }

        if let Some(user_id) = payload.user {
            self.ensure_user_exists(user_id).await?;
        }

        let activity = self.repo.update(id, payload).await?.ok_or_else(|| {
            not_found_error(
                "Activity",
                &id.to_string(),
                "activity_service::update_activity",
            )
        })?;
        info!(activity_id = %activity.id, "Activity updated");
        Ok(activity.into())
    }

    pub async fn delete_activity(&self, id: Uuid) -> AppResult<()> {
        let result = self.repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(not_found_error(
                "Activity",
                &id.to_string(),
                "activity_service::delete_activity",
            ));
        }
        info!(activity_id = %id, "Activity deleted");
        Ok(())
    }

    async fn ensure_user_exists(&self, user_id: Uuid) -> AppResult<()> {
        if !self.user_repo.exists(user_id).await? {
            warn!(user_id = %user_id, "Activity references unknown user");
            return Err(validation_error(
                "user",
                &format!("Invalid pk \"{}\" - object does not exist.", user_id),
            ));
        }
        Ok(())
    }
}
