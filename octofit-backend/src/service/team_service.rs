// src/service/team_service.rs

use crate::api::dto::team_dto::{CreateTeamDto, TeamDto, UpdateTeamDto};
use crate::db::DbPool;
use crate::error::AppResult;
use crate::repository::team_repository::TeamRepository;
use crate::utils::error_helper::not_found_error;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub struct TeamService {
    repo: Arc<TeamRepository>,
}

impl TeamService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(TeamRepository::new(db_pool)),
        }
    }

    pub async fn list_teams(&self) -> AppResult<Vec<TeamDto>> {
        let teams = self.repo.find_all().await?;
        Ok(teams.into_iter().map(Into::into).collect())
    }

    pub async fn get_team(&self, id: Uuid) -> AppResult<TeamDto> {
        let team = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Team", &id.to_string(), "team_service::get_team"))?;
        Ok(team.into())
    }

    pub async fn create_team(&self, payload: CreateTeamDto) -> AppResult<TeamDto> {
        let team = self.repo.create(payload).await?;
        info!(team_id = %team.id, name = %team.name, "Team created");
        Ok(team.into())
    }

    pub async fn update_team(&self, id: Uuid, payload: UpdateTeamDto) -> AppResult<TeamDto> {
        let team = self
            .repo
            .update(id, payload)
            .await?
            .ok_or_else(|| not_found_error("Team", &id.to_string(), "team_service::update_team"))?;
        info!(team_id = %team.id, "Team updated");
        Ok(team.into())
    }

    /// チームを削除する。所属ユーザーとリーダーボードのエントリも連鎖削除される
    pub async fn delete_team(&self, id: Uuid) -> AppResult<()> {
        let result = self.repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(not_found_error(
                "Team",
                &id.to_string(),
                "team_service::delete_team",
            ));
        }
        info!(team_id = %id, "Team deleted");
        Ok(())
    }
}
