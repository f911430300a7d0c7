// src/api/handlers/activity_handler.rs
use crate::api::dto::activity_dto::{ActivityDto, CreateActivityDto, UpdateActivityDto};
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

pub async fn list_activities_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<ActivityDto>>> {
    let activities = app_state.activity_service.list_activities().await?;
    info!(activity_count = activities.len(), "Activities retrieved");
    Ok(Json(activities))
}

pub async fn get_activity_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<Json<ActivityDto>> {
    let activity = app_state.activity_service.get_activity(id).await?;
    Ok(Json(activity))
}

pub async fn create_activity_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateActivityDto>,
) -> AppResult<impl IntoResponse> {
    info!(
        user_id = %payload.user,
        activity_type = %payload.activity_type,
        "Recording activity"
    );
    let activity = app_state.activity_service.create_activity(payload).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

/// PUT: 全フィールド必須（timestamp のみ省略可）
pub async fn replace_activity_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<CreateActivityDto>,
) -> AppResult<Json<ActivityDto>> {
    let activity = app_state
        .activity_service
        .update_activity(id, UpdateActivityDto::from(payload))
        .await?;
    Ok(Json(activity))
}

/// PATCH: 指定されたフィールドのみ更新
pub async fn update_activity_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<UpdateActivityDto>,
) -> AppResult<Json<ActivityDto>> {
    let activity = app_state
        .activity_service
        .update_activity(id, payload)
        .await?;
    Ok(Json(activity))
}

pub async fn delete_activity_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<StatusCode> {
    info!(activity_id = %id, "Deleting activity");
    app_state.activity_service.delete_activity(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn collection_routes() -> MethodRouter<AppState> {
    get(list_activities_handler).post(create_activity_handler)
}

pub fn detail_routes() -> MethodRouter<AppState> {
    get(get_activity_handler)
        .put(replace_activity_handler)
        .patch(update_activity_handler)
        .delete(delete_activity_handler)
}
