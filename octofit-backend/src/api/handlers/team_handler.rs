// src/api/handlers/team_handler.rs
use crate::api::dto::team_dto::{CreateTeamDto, TeamDto, UpdateTeamDto};
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

pub async fn list_teams_handler(State(app_state): State<AppState>) -> AppResult<Json<Vec<TeamDto>>> {
    let teams = app_state.team_service.list_teams().await?;
    info!(team_count = teams.len(), "Teams retrieved");
    Ok(Json(teams))
}

pub async fn get_team_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<Json<TeamDto>> {
    let team = app_state.team_service.get_team(id).await?;
    Ok(Json(team))
}

pub async fn create_team_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTeamDto>,
) -> AppResult<impl IntoResponse> {
    info!(name = %payload.name, "Creating team");
    let team = app_state.team_service.create_team(payload).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

/// PUT: 全フィールド必須
pub async fn replace_team_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<CreateTeamDto>,
) -> AppResult<Json<TeamDto>> {
    let team = app_state
        .team_service
        .update_team(id, UpdateTeamDto::from(payload))
        .await?;
    Ok(Json(team))
}

/// PATCH: 指定されたフィールドのみ更新
pub async fn update_team_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<UpdateTeamDto>,
) -> AppResult<Json<TeamDto>> {
    let team = app_state.team_service.update_team(id, payload).await?;
    Ok(Json(team))
}

pub async fn delete_team_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<StatusCode> {
    info!(team_id = %id, "Deleting team");
    app_state.team_service.delete_team(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn collection_routes() -> MethodRouter<AppState> {
    get(list_teams_handler).post(create_team_handler)
}

pub fn detail_routes() -> MethodRouter<AppState> {
    get(get_team_handler)
        .put(replace_team_handler)
        .patch(update_team_handler)
        .delete(delete_team_handler)
}
