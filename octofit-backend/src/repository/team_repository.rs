// src/repository/team_repository.rs
use crate::api::dto::team_dto::{CreateTeamDto, UpdateTeamDto};
use crate::domain::team_model::{self, ActiveModel as TeamActiveModel, Entity as TeamEntity};
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Set};
use sea_orm::{PaginatorTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

pub struct TeamRepository {
    db: DbConn,
}

impl TeamRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<team_model::Model>, DbErr> {
        TeamEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<team_model::Model>, DbErr> {
        TeamEntity::find()
            .order_by_asc(team_model::Column::CreatedAt)
            .order_by_asc(team_model::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = TeamEntity::find()
            .filter(team_model::Column::Id.eq(id))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    pub async fn create(&self, payload: CreateTeamDto) -> Result<team_model::Model, DbErr> {
        let new_team = TeamActiveModel {
            name: Set(payload.name.trim().to_string()),
            ..Default::default()
        };
        new_team.insert(&self.db).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateTeamDto,
    ) -> Result<Option<team_model::Model>, DbErr> {
        let team = match TeamEntity::find_by_id(id).one(&self.db).await? {
            Some(t) => t,
            None => return Ok(None),
        };

        let mut active_model: TeamActiveModel = team.clone().into();
        let mut changed = false;

        if let Some(name) = payload.name {
            active_model.name = Set(name.trim().to_string());
            changed = true;
        }

        if changed {
            Ok(Some(active_model.update(&self.db).await?))
        } else {
            Ok(Some(team))
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        TeamEntity::delete_by_id(id).exec(&self.db).await
    }
}
