// src/repository/user_repository.rs
use crate::api::dto::user_dto::{CreateUserDto, UpdateUserDto};
use crate::domain::user_model::{self, ActiveModel as UserActiveModel, Entity as UserEntity};
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Set};
use sea_orm::{PaginatorTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

pub struct UserRepository {
    db: DbConn,
}

impl UserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<user_model::Model>, DbErr> {
        UserEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<user_model::Model>, DbErr> {
        UserEntity::find()
            .order_by_asc(user_model::Column::CreatedAt)
            .order_by_asc(user_model::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = UserEntity::find()
            .filter(user_model::Column::Id.eq(id))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    /// メールアドレスの重複チェック（`exclude_id` のユーザー自身は除外）
    pub async fn is_email_taken(
        &self,
        email: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, DbErr> {
        let mut query = UserEntity::find().filter(user_model::Column::Email.eq(email));
        if let Some(id) = exclude_id {
            query = query.filter(user_model::Column::Id.ne(id));
        }
        let count = query.count(&self.db).await?;
        Ok(count > 0)
    }

    pub async fn create(&self, payload: CreateUserDto) -> Result<user_model::Model, DbErr> {
        let new_user = UserActiveModel {
            name: Set(payload.name.trim().to_string()),
            email: Set(payload.email.trim().to_string()),
            team_id: Set(payload.team),
            ..Default::default()
        };
        new_user.insert(&self.db).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateUserDto,
    ) -> Result<Option<user_model::Model>, DbErr> {
        let user = match UserEntity::find_by_id(id).one(&self.db).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        let mut active_model: UserActiveModel = user.clone().into();
        let mut changed = false;

        if let Some(name) = payload.name {
            active_model.name = Set(name.trim().to_string());
            changed = true;
        }

        if let Some(email) = payload.email {
            active_model.email = Set(email.trim().to_string());
            changed = true;
        }

        if let Some(team_id) = payload.team {
            active_model.team_id = Set(team_id);
            changed = true;
        }

        if changed {
            Ok(Some(active_model.update(&self.db).await?))
        } else {
            Ok(Some(user))
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        UserEntity::delete_by_id(id).exec(&self.db).await
    }
}
