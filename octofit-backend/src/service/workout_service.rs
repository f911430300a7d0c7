// src/service/workout_service.rs

use crate::api::dto::workout_dto::{CreateWorkoutDto, UpdateWorkoutDto, WorkoutDto};
use crate::db::DbPool;
use crate::error::AppResult;
use crate::repository::workout_repository::WorkoutRepository;
use crate::utils::error_helper::not_found_error;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub struct WorkoutService {
    repo: Arc<WorkoutRepository>,
}

impl WorkoutService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(WorkoutRepository::new(db_pool)),
        }
    }

    pub async fn list_workouts(&self) -> AppResult<Vec<WorkoutDto>> {
        let workouts = self.repo.find_all().await?;
        Ok(workouts.into_iter().map(Into::into).collect())
    }

    pub async fn get_workout(&self, id: Uuid) -> AppResult<WorkoutDto> {
        let workout = self.repo.find_by_id(id).await?.ok_or_else(|| {
            not_found_error("Workout", &id.to_string(), "workout_service::get_workout")
        })?;
        Ok(workout.into())
    }

    pub async fn create_workout(&self, payload: CreateWorkoutDto) -> AppResult<WorkoutDto> {
        let workout = self.repo.create(payload).await?;
        info!(workout_id = %workout.id, name = %workout.name, "Workout created");
        Ok(workout.into())
    }

    pub async fn update_workout(
        &self,
        id: Uuid,
        payload: UpdateWorkoutDto,
    ) -> AppResult<WorkoutDto> {
        let workout = self.repo.update(id, payload).await?.ok_or_else(|| {
            not_found_error(
                "Workout",
                &id.to_string(),
                "workout_service::update_workout",
            )
        })?;
        info!(workout_id = %workout.id, "Workout updated");
        Ok(workout.into())
    }

    pub async fn delete_workout(&self, id: Uuid) -> AppResult<()> {
        let result = self.repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(not_found_error(
                "Workout",
                &id.to_string(),
                "workout_service::delete_workout",
            ));
        }
        info!(workout_id = %id, "Workout deleted");
        Ok(())
    }
}
