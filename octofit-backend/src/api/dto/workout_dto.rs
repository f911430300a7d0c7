// src/api/dto/workout_dto.rs
use crate::api::dto::patch::non_null;
use crate::domain::workout_model;
use crate::utils::validation::common;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreateWorkoutDto {
    #[validate(
        length(
            min = common::name::MIN_LENGTH,
            max = common::name::MAX_LENGTH,
            message = "Workout name must be between 1 and 100 characters"
        ),
        custom(function = common::validate_not_empty_or_whitespace)
    )]
    pub name: String,

    #[validate(length(
        max = common::workout::DESCRIPTION_MAX_LENGTH,
        message = "Workout description must not exceed 2000 characters"
    ))]
    pub description: String,

    #[validate(length(
        max = common::workout::SUGGESTED_FOR_MAX_LENGTH,
        message = "Suggested for must not exceed 100 characters"
    ))]
    pub suggested_for: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct UpdateWorkoutDto {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(
        length(
            min = common::name::MIN_LENGTH,
            max = common::name::MAX_LENGTH,
            message = "Workout name must be between 1 and 100 characters"
        ),
        custom(function = common::validate_not_empty_or_whitespace)
    )]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(
        max = common::workout::DESCRIPTION_MAX_LENGTH,
        message = "Workout description must not exceed 2000 characters"
    ))]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(
        max = common::workout::SUGGESTED_FOR_MAX_LENGTH,
        message = "Suggested for must not exceed 100 characters"
    ))]
    pub suggested_for: Option<String>,
}

impl From<CreateWorkoutDto> for UpdateWorkoutDto {
    fn from(dto: CreateWorkoutDto) -> Self {
        Self {
            name: Some(dto.name),
            description: Some(dto.description),
            suggested_for: Some(dto.suggested_for),
        }
    }
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub suggested_for: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<workout_model::Model> for WorkoutDto {
    fn from(model: workout_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            suggested_for: model.suggested_for,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
