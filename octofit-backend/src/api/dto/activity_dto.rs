// src/api/dto/activity_dto.rs
use crate::api::dto::patch::non_null;
use crate::domain::activity_model;
use crate::utils::validation::common;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreateActivityDto {
    /// 記録したユーザーのID
    pub user: Uuid,

    #[serde(rename = "type")]
    #[validate(
        length(
            min = 1,
            max = common::activity::TYPE_MAX_LENGTH,
            message = "Activity type must be between 1 and 100 characters"
        ),
        custom(function = common::validate_not_empty_or_whitespace)
    )]
    pub activity_type: String,

    #[validate(range(
        min = common::activity::DURATION_MIN,
        message = "Duration must not be negative"
    ))]
    pub duration: i32,

    /// 省略時は登録時刻
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct UpdateActivityDto {
    #[serde(default, deserialize_with = "non_null")]
    pub user: Option<Uuid>,

    #[serde(rename = "type", default, deserialize_with = "non_null")]
    #[validate(
        length(
            min = 1,
            max = common::activity::TYPE_MAX_LENGTH,
            message = "Activity type must be between 1 and 100 characters"
        ),
        custom(function = common::validate_not_empty_or_whitespace)
    )]
    pub activity_type: Option<String>,

    #[serde(default, deserialize_with = "non_null")]
    #[validate(range(
        min = common::activity::DURATION_MIN,
        message = "Duration must not be negative"
    ))]
    pub duration: Option<i32>,

    #[serde(default, deserialize_with = "non_null")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl From<CreateActivityDto> for UpdateActivityDto {
    fn from(dto: CreateActivityDto) -> Self {
        Self {
            user: Some(dto.user),
            activity_type: Some(dto.activity_type),
            duration: Some(dto.duration),
            timestamp: dto.timestamp,
        }
    }
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActivityDto {
    pub id: Uuid,
    pub user: Uuid,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub duration: i32,
    pub timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<activity_model::Model> for ActivityDto {
    fn from(model: activity_model::Model) -> Self {
        Self {
            id: model.id,
            user: model.user_id,
            activity_type: model.activity_type,
            duration: model.duration,
            timestamp: model.timestamp,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
