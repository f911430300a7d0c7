use crate::error::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// URLパスからUUIDパラメータ名を推測する
fn extract_uuid_param_name(path: &str) -> &'static str {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    // /api/{prefix}/{id}/ の {prefix} からパラメータ名を決める
    match segments.get(1).copied() {
        Some("users") => "user_id",
        Some("teams") => "team_id",
        Some("activities") => "activity_id",
        Some("workouts") => "workout_id",
        Some("leaderboard") => "leaderboard_id",
        _ => "id",
    }
}

/// 統一UUID Extractor
/// パスパラメータからUUIDを抽出し、不正な形式はバリデーションエラーとして返す
#[derive(Debug, Clone, Copy)]
pub struct ValidatedUuid(pub Uuid);

impl<S> FromRequestParts<S> for ValidatedUuid
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(uuid_str) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                let param_name = extract_uuid_param_name(parts.uri.path());
                AppError::ValidationError(format!(
                    "Missing path parameter '{}': {}",
                    param_name, e
                ))
            })?;

        let uuid = Uuid::parse_str(&uuid_str).map_err(|_| {
            let param_name = extract_uuid_param_name(parts.uri.path());
            AppError::ValidationError(format!(
                "Invalid UUID format for '{}': '{}'",
                param_name, uuid_str
            ))
        })?;

        Ok(ValidatedUuid(uuid))
    }
}
