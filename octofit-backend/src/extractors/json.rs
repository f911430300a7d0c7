use crate::error::AppError;
use crate::utils::error_helper::convert_validation_errors;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// デシリアライズ後に自動でバリデーションを行う JSON Extractor
///
/// 必須フィールドの欠落・型不一致・構文エラー・バリデーション違反は
/// すべて 400 (ValidationError) として返す。
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection_to_error)?;

        value
            .validate()
            .map_err(|e| convert_validation_errors(e, "request_body"))?;

        Ok(ValidatedJson(value))
    }
}

fn json_rejection_to_error(rejection: JsonRejection) -> AppError {
    tracing::warn!(error = %rejection.body_text(), "Rejected JSON body");
    AppError::ValidationError(rejection.body_text())
}
