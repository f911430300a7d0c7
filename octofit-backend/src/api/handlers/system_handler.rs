// src/api/handlers/system_handler.rs
use crate::api::dto::system_dto::{
    ApiRootResponse, CorsStatusResponse, DocumentationLinks, EndpointDirectory, HealthResponse,
    MethodNotAllowedResponse, ResourceIndexResponse,
};
use crate::api::router::{slash_redirect_target, RESOURCES};
use crate::api::AppState;
use crate::config::AppConfig;
use crate::error::AppError;
use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    Json,
};

pub const SERVICE_NAME: &str = "OctoFit Tracker Backend";
pub const API_VERSION: &str = "1.0.0";

const CORS_ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const CORS_ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// ヘルスチェックの内容（設定のみから決まる）
pub fn health_response(config: &AppConfig) -> HealthResponse {
    let codespace = &config.codespace;
    HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        codespace: codespace.codespace_label().to_string(),
        backend_url: codespace.backend_url(),
        frontend_url: codespace.frontend_url(),
    }
}

/// APIルートのディレクトリ
pub fn api_root_response(config: &AppConfig) -> ApiRootResponse {
    let codespace = &config.codespace;
    let backend_url = codespace.backend_url();
    let resource_url = |prefix: &str| format!("{}/api/{}/", backend_url, prefix);

    ApiRootResponse {
        message: "Welcome to OctoFit Tracker API".to_string(),
        version: API_VERSION.to_string(),
        environment: codespace.environment_label().to_string(),
        backend_url: backend_url.clone(),
        frontend_url: codespace.frontend_url(),
        endpoints: EndpointDirectory {
            users: resource_url("users"),
            teams: resource_url("teams"),
            activities: resource_url("activities"),
            workouts: resource_url("workouts"),
            leaderboard: resource_url("leaderboard"),
            health: format!("{}/api/health/", backend_url),
            admin: format!("{}/admin/", backend_url),
        },
        documentation: DocumentationLinks {
            api_root: format!("{}/", backend_url),
            admin_panel: format!("{}/admin/", backend_url),
            browsable_api: format!("{}/api/", backend_url),
        },
    }
}

/// GET /api/ : リソース名とコレクションURLの一覧
pub fn resource_index_response(config: &AppConfig) -> ResourceIndexResponse {
    let backend_url = config.codespace.backend_url();
    RESOURCES
        .iter()
        .map(|resource| {
            (
                resource.prefix.to_string(),
                format!("{}{}", backend_url, resource.collection_path()),
            )
        })
        .collect()
}

pub async fn health_check_handler(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(health_response(&app_state.config))
}

pub async fn api_root_handler(State(app_state): State<AppState>) -> Json<ApiRootResponse> {
    Json(api_root_response(&app_state.config))
}

pub async fn resource_index_handler(
    State(app_state): State<AppState>,
) -> Json<ResourceIndexResponse> {
    Json(resource_index_response(&app_state.config))
}

/// /api/cors/ : OPTIONS のみ受け付ける
pub async fn cors_preflight_handler(method: Method) -> Response {
    if method != Method::OPTIONS {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(MethodNotAllowedResponse {
                error: "Method not allowed".to_string(),
            }),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, CORS_ALLOW_METHODS),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, CORS_ALLOW_HEADERS),
        ],
        Json(CorsStatusResponse {
            status: "ok".to_string(),
        }),
    )
        .into_response()
}

/// ルートテーブルにないパス
///
/// 末尾スラッシュを付ければ一致するパスは 308 で転送し、それ以外は 404。
pub async fn fallback_handler(method: Method, uri: Uri) -> Response {
    if let Some(target) = slash_redirect_target(uri.path()) {
        let location = match uri.query() {
            Some(query) => format!("{}?{}", target, query),
            None => target,
        };
        tracing::debug!(method = %method, from = %uri.path(), to = %location, "Appending slash");
        return Redirect::permanent(&location).into_response();
    }

    tracing::debug!(method = %method, path = %uri.path(), "No route matched");
    AppError::NotFound(format!("No endpoint matches {} {}", method, uri.path())).into_response()
}
