// src/api/handlers/workout_handler.rs
use crate::api::dto::workout_dto::{CreateWorkoutDto, UpdateWorkoutDto, WorkoutDto};
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

pub async fn list_workouts_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<WorkoutDto>>> {
    let workouts = app_state.workout_service.list_workouts().await?;
    Ok(Json(workouts))
}

pub async fn get_workout_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<Json<WorkoutDto>> {
    let workout = app_state.workout_service.get_workout(id).await?;
    Ok(Json(workout))
}

pub async fn create_workout_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateWorkoutDto>,
) -> AppResult<impl IntoResponse> {
    info!(name = %payload.name, "Creating workout");
    let workout = app_state.workout_service.create_workout(payload).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

pub async fn replace_workout_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<CreateWorkoutDto>,
) -> AppResult<Json<WorkoutDto>> {
    let workout = app_state
        .workout_service
        .update_workout(id, UpdateWorkoutDto::from(payload))
        .await?;
    Ok(Json(workout))
}

pub async fn update_workout_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<UpdateWorkoutDto>,
) -> AppResult<Json<WorkoutDto>> {
    let workout = app_state.workout_service.update_workout(id, payload).await?;
    Ok(Json(workout))
}

pub async fn delete_workout_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<StatusCode> {
    info!(workout_id = %id, "Deleting workout");
    app_state.workout_service.delete_workout(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn collection_routes() -> MethodRouter<AppState> {
    get(list_workouts_handler).post(create_workout_handler)
}

pub fn detail_routes() -> MethodRouter<AppState> {
    get(get_workout_handler)
        .put(replace_workout_handler)
        .patch(update_workout_handler)
        .delete(delete_workout_handler)
}
