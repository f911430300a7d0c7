// src/api/dto/leaderboard_dto.rs
use crate::api::dto::patch::non_null;
use crate::domain::leaderboard_model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreateLeaderboardDto {
    pub team: Uuid,
    pub points: i32,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct UpdateLeaderboardDto {
    #[serde(default, deserialize_with = "non_null")]
    pub team: Option<Uuid>,
    #[serde(default, deserialize_with = "non_null")]
    pub points: Option<i32>,
}

impl From<CreateLeaderboardDto> for UpdateLeaderboardDto {
    fn from(dto: CreateLeaderboardDto) -> Self {
        Self {
            team: Some(dto.team),
            points: Some(dto.points),
        }
    }
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LeaderboardDto {
    pub id: Uuid,
    pub team: Uuid,
    pub points: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<leaderboard_model::Model> for LeaderboardDto {
    fn from(model: leaderboard_model::Model) -> Self {
        Self {
            id: model.id,
            team: model.team_id,
            points: model.points,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
