// src/api/dto/user_dto.rs
use crate::api::dto::patch::non_null;
use crate::domain::user_model;
use crate::utils::validation::common;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreateUserDto {
    #[validate(
        length(
            min = common::name::MIN_LENGTH,
            max = common::name::MAX_LENGTH,
            message = "Name must be between 1 and 100 characters"
        ),
        custom(function = common::validate_not_empty_or_whitespace)
    )]
    pub name: String,

    #[validate(
        email(message = "Enter a valid email address"),
        length(
            max = common::email::MAX_LENGTH,
            message = "Email must not exceed 254 characters"
        )
    )]
    pub email: String,

    /// 所属チームのID
    pub team: Uuid,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct UpdateUserDto {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(
        length(
            min = common::name::MIN_LENGTH,
            max = common::name::MAX_LENGTH,
            message = "Name must be between 1 and 100 characters"
        ),
        custom(function = common::validate_not_empty_or_whitespace)
    )]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "non_null")]
    #[validate(
        email(message = "Enter a valid email address"),
        length(
            max = common::email::MAX_LENGTH,
            message = "Email must not exceed 254 characters"
        )
    )]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "non_null")]
    pub team: Option<Uuid>,
}

impl From<CreateUserDto> for UpdateUserDto {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            name: Some(dto.name),
            email: Some(dto.email),
            team: Some(dto.team),
        }
    }
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub team: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<user_model::Model> for UserDto {
    fn from(model: user_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            team: model.team_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
