// src/service/leaderboard_service.rs

use crate::api::dto::leaderboard_dto::{
    CreateLeaderboardDto, LeaderboardDto, UpdateLeaderboardDto,
};
use crate::db::DbPool;
use crate::error::AppResult;
use crate::repository::leaderboard_repository::LeaderboardRepository;
use crate::repository::team_repository::TeamRepository;
use crate::utils::error_helper::{not_found_error, validation_error};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

pub struct LeaderboardService {
    repo: Arc<LeaderboardRepository>,
    team_repo: Arc<TeamRepository>,
}

impl LeaderboardService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(LeaderboardRepository::new(db_pool.clone())),
            team_repo: Arc::new(TeamRepository::new(db_pool)),
        }
    }

    pub async fn list_entries(&self) -> AppResult<Vec<LeaderboardDto>> {
        let entries = self.repo.find_all().await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }

    pub async fn get_entry(&self, id: Uuid) -> AppResult<LeaderboardDto> {
        let entry = self.repo.find_by_id(id).await?.ok_or_else(|| {
            not_found_error(
                "Leaderboard entry",
                &id.to_string(),
                "leaderboard_service::get_entry",
            )
        })?;
        Ok(entry.into())
    }

    pub async fn create_entry(&self, payload: CreateLeaderboardDto) -> AppResult<LeaderboardDto> {
        self.ensure_team_exists(payload.team).await?;

        let entry = self.repo.create(payload).await?;
        info!(
            entry_id = %entry.id,
            team_id = %entry.team_id,
            points = entry.points,
            "Leaderboard entry created"
        );
        Ok(entry.into())
    }

    pub async fn update_entry(
        &self,
        id: Uuid,
        payload: UpdateLeaderboardDto,
    ) -> AppResult<LeaderboardDto> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(not_found_error(
                "Leaderboard entry",
                &id.to_string(),
                "leaderboard_service::update_entry",
            ));
        }

        if let Some(team_id) = payload.team {
            self.ensure_team_exists(team_id).await?;
        }

        let entry = self.repo.update(id, payload).await?.ok_or_else(|| {
            not_found_error(
                "Leaderboard entry",
                &id.to_string(),
                "leaderboard_service::update_entry",
            )
        })?;
        info!(entry_id = %entry.id, points = entry.points, "Leaderboard entry updated");
        Ok(entry.into())
    }

    pub async fn delete_entry(&self, id: Uuid) -> AppResult<()> {
        let result = self.repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(not_found_error(
                "Leaderboard entry",
                &id.to_string(),
                "leaderboard_service::delete_entry",
            ));
        }
        info!(entry_id = %id, "Leaderboard entry deleted");
        Ok(())
    }

    async fn ensure_team_exists(&self, team_id: Uuid) -> AppResult<()> {
        if !self.team_repo.exists(team_id).await? {
            warn!(team_id = %team_id, "Leaderboard entry references unknown team");
            return Err(validation_error(
                "team",
                &format!("Invalid pk \"{}\" - object does not exist.", team_id),
            ));
        }
        Ok(())
    }
}
