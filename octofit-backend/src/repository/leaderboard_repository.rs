// src/repository/leaderboard_repository.rs
use crate::api::dto::leaderboard_dto::{CreateLeaderboardDto, UpdateLeaderboardDto};
use crate::domain::leaderboard_model::{
    self, ActiveModel as LeaderboardActiveModel, Entity as LeaderboardEntity,
};
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Set};
use sea_orm::QueryOrder;
use uuid::Uuid;

pub struct LeaderboardRepository {
    db: DbConn,
}

impl LeaderboardRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<leaderboard_model::Model>, DbErr> {
        LeaderboardEntity::find_by_id(id).one(&self.db).await
    }

    // 順位計算はしない。登録順に返す
    pub async fn find_all(&self) -> Result<Vec<leaderboard_model::Model>, DbErr> {
        LeaderboardEntity::find()
            .order_by_asc(leaderboard_model::Column::CreatedAt)
            .order_by_asc(leaderboard_model::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        payload: CreateLeaderboardDto,
    ) -> Result<leaderboard_model::Model, DbErr> {
        let new_entry = LeaderboardActiveModel {
            team_id: Set(payload.team),
            points: Set(payload.points),
            ..Default::default()
        };
        new_entry.insert(&self.db).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateLeaderboardDto,
    ) -> Result<Option<leaderboard_model::Model>, DbErr> {
        let entry = match LeaderboardEntity::find_by_id(id).one(&self.db).await? {
            Some(e) => e,
            None => return Ok(None),
        };

        let mut active_model: LeaderboardActiveModel = entry.clone().into();
        let mut changed = false;

        if let Some(team_id) = payload.team {
            active_model.team_id = Set(team_id);
            changed = true;
        }

        if let Some(points) = payload.points {
            active_model.points = Set(points);
            changed = true;
        }

        if changed {
            Ok(Some(active_model.update(&self.db).await?))
        } else {
            Ok(Some(entry))
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        LeaderboardEntity::delete_by_id(id).exec(&self.db).await
    }
}
