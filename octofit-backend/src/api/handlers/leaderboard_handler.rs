// src/api/handlers/leaderboard_handler.rs
use crate::api::dto::leaderboard_dto::{
    CreateLeaderboardDto, LeaderboardDto, UpdateLeaderboardDto,
};
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

pub async fn list_leaderboard_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<LeaderboardDto>>> {
    let entries = app_state.leaderboard_service.list_entries().await?;
    Ok(Json(entries))
}

pub async fn get_leaderboard_entry_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<Json<LeaderboardDto>> {
    let entry = app_state.leaderboard_service.get_entry(id).await?;
    Ok(Json(entry))
}

pub async fn create_leaderboard_entry_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateLeaderboardDto>,
) -> AppResult<impl IntoResponse> {
    info!(team_id = %payload.team, points = payload.points, "Creating leaderboard entry");
    let entry = app_state.leaderboard_service.create_entry(payload).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn replace_leaderboard_entry_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<CreateLeaderboardDto>,
) -> AppResult<Json<LeaderboardDto>> {
    let entry = app_state
        .leaderboard_service
        .update_entry(id, UpdateLeaderboardDto::from(payload))
        .await?;
    Ok(Json(entry))
}

pub async fn update_leaderboard_entry_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<UpdateLeaderboardDto>,
) -> AppResult<Json<LeaderboardDto>> {
    let entry = app_state
        .leaderboard_service
        .update_entry(id, payload)
        .await?;
    Ok(Json(entry))
}

pub async fn delete_leaderboard_entry_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<StatusCode> {
    info!(entry_id = %id, "Deleting leaderboard entry");
    app_state.leaderboard_service.delete_entry(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn collection_routes() -> MethodRouter<AppState> {
    get(list_leaderboard_handler).post(create_leaderboard_entry_handler)
}

pub fn detail_routes() -> MethodRouter<AppState> {
    get(get_leaderboard_entry_handler)
        .put(replace_leaderboard_entry_handler)
        .patch(update_leaderboard_entry_handler)
        .delete(delete_leaderboard_entry_handler)
}
