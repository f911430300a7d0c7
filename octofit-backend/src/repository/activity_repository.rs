// src/repository/activity_repository.rs
use crate::api::dto::activity_dto::{CreateActivityDto, UpdateActivityDto};
use crate::domain::activity_model::{
    self, ActiveModel as ActivityActiveModel, Entity as ActivityEntity,
};
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Set};
use sea_orm::QueryOrder;
use uuid::Uuid;

pub struct ActivityRepository {
    db: DbConn,
}

impl ActivityRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<activity_model::Model>, DbErr> {
        ActivityEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<activity_model::Model>, DbErr> {
        ActivityEntity::find()
            .order_by_asc(activity_model::Column::CreatedAt)
            .order_by_asc(activity_model::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn create(&self, payload: CreateActivityDto) -> Result<activity_model::Model, DbErr> {
        let mut new_activity = ActivityActiveModel {
            user_id: Set(payload.user),
            activity_type: Set(payload.activity_type.trim().to_string()),
            duration: Set(payload.duration),
            ..Default::default()
        };
        // 未指定なら ActiveModelBehavior::new が入れた現在時刻のまま
        if let Some(timestamp) = payload.timestamp {
            new_activity.timestamp = Set(timestamp);
        }
        new_activity.insert(&self.db).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateActivityDto,
    ) -> Result<Option<activity_model::Model>, DbErr> {
        let activity = match ActivityEntity::find_by_id(id).one(&self.db).await? {
            Some(a) => a,
            None => return Ok(None),
        };

        let mut active_model: ActivityActiveModel = activity.clone().into();
        let mut changed = false;

        if let Some(user_id) = payload.user {
            active_model.user_id = Set(user_id);
            changed = true;
        }

        if let Some(activity_type) = payload.activity_type {
            active_model.activity_type = Set(activity_type.trim().to_string());
            changed = true;
        }

        if let Some(duration) = payload.duration {
            active_model.duration = Set(duration);
            changed = true;
        }

        if let Some(timestamp) = payload.timestamp {
            active_model.timestamp = Set(timestamp);
            changed = true;
        }

        if changed {
            Ok(Some(active_model.update(&self.db).await?))
        } else {
            Ok(Some(activity))
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        ActivityEntity::delete_by_id(id).exec(&self.db).await
    }
}
