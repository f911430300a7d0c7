// src/repository/workout_repository.rs
use crate::api::dto::workout_dto::{CreateWorkoutDto, UpdateWorkoutDto};
use crate::domain::workout_model::{
    self, ActiveModel as WorkoutActiveModel, Entity as WorkoutEntity,
};
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Set};
use sea_orm::QueryOrder;
use uuid::Uuid;

pub struct WorkoutRepository {
    db: DbConn,
}

impl WorkoutRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<workout_model::Model>, DbErr> {
        WorkoutEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<workout_model::Model>, DbErr> {
        WorkoutEntity::find()
            .order_by_asc(workout_model::Column::CreatedAt)
            .order_by_asc(workout_model::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn create(&self, payload: CreateWorkoutDto) -> Result<workout_model::Model, DbErr> {
        let new_workout = WorkoutActiveModel {
            name: Set(payload.name.trim().to_string()),
            description: Set(payload.description),
            suggested_for: Set(payload.suggested_for),
            ..Default::default()
        };
        new_workout.insert(&self.db).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateWorkoutDto,
    ) -> Result<Option<workout_model::Model>, DbErr> {
        let workout = match WorkoutEntity::find_by_id(id).one(&self.db).await? {
            Some(w) => w,
            None => return Ok(None),
        };

        let mut active_model: WorkoutActiveModel = workout.clone().into();
        let mut changed = false;

        if let Some(name) = payload.name {
            active_model.name = Set(name.trim().to_string());
            changed = true;
        }

        if let Some(description) = payload.description {
            active_model.description = Set(description);
            changed = true;
        }

        if let Some(suggested_for) = payload.suggested_for {
            active_model.suggested_for = Set(suggested_for);
            changed = true;
        }

        if changed {
            Ok(Some(active_model.update(&self.db).await?))
        } else {
            Ok(Some(workout))
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        WorkoutEntity::delete_by_id(id).exec(&self.db).await
    }
}
