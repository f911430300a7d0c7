// src/api/handlers/user_handler.rs
use crate::api::dto::user_dto::{CreateUserDto, UpdateUserDto, UserDto};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::{ValidatedJson, ValidatedUuid};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, MethodRouter},
};
use tracing::info;

pub async fn list_users_handler(State(app_state): State<AppState>) -> AppResult<Json<Vec<UserDto>>> {
    let users = app_state.user_service.list_users().await?;
    info!(user_count = users.len(), "Users retrieved");
    Ok(Json(users))
}

pub async fn get_user_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<Json<UserDto>> {
    let user = app_state.user_service.get_user(id).await?;
    Ok(Json(user))
}

pub async fn create_user_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserDto>,
) -> AppResult<impl IntoResponse> {
    info!(team_id = %payload.team, "Creating user");
    let user = app_state.user_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT: 全フィールド必須
pub async fn replace_user_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<CreateUserDto>,
) -> AppResult<Json<UserDto>> {
    let user = app_state
        .user_service
        .update_user(id, UpdateUserDto::from(payload))
        .await?;
    Ok(Json(user))
}

/// PATCH: 指定されたフィールドのみ更新
pub async fn update_user_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<UpdateUserDto>,
) -> AppResult<Json<UserDto>> {
    let user = app_state.user_service.update_user(id, payload).await?;
    Ok(Json(user))
}

pub async fn delete_user_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<StatusCode> {
    info!(user_id = %id, "Deleting user");
    app_state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn collection_routes() -> MethodRouter<AppState> {
    get(list_users_handler).post(create_user_handler)
}

pub fn detail_routes() -> MethodRouter<AppState> {
    get(get_user_handler)
        .put(replace_user_handler)
        .patch(update_user_handler)
        .delete(delete_user_handler)
}
