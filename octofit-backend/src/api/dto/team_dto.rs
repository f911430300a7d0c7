// src/api/dto/team_dto.rs
use crate::api::dto::patch::non_null;
use crate::domain::team_model;
use crate::utils::validation::common;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreateTeamDto {
    #[validate(
        length(
            min = common::name::MIN_LENGTH,
            max = common::name::MAX_LENGTH,
            message = "Team name must be between 1 and 100 characters"
        ),
        custom(function = common::validate_not_empty_or_whitespace)
    )]
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct UpdateTeamDto {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(
        length(
            min = common::name::MIN_LENGTH,
            max = common::name::MAX_LENGTH,
            message = "Team name must be between 1 and 100 characters"
        ),
        custom(function = common::validate_not_empty_or_whitespace)
    )]
    pub name: Option<String>,
}

// PUT は全フィールド必須の作成DTOで受け取り、全項目置き換えの更新として扱う
impl From<CreateTeamDto> for UpdateTeamDto {
    fn from(dto: CreateTeamDto) -> Self {
        Self {
            name: Some(dto.name),
        }
    }
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TeamDto {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<team_model::Model> for TeamDto {
    fn from(model: team_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
