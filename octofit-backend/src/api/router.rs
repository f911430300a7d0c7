// src/api/router.rs
use crate::api::handlers::{
    activity_handler, leaderboard_handler, system_handler, team_handler, user_handler,
    workout_handler,
};
use crate::api::AppState;
use crate::logging::{inject_request_context, logging_middleware};
use crate::middleware::cors_layer;
use axum::{
    middleware,
    routing::{any, get, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;

/// リソースのパスプレフィックスとコントローラーの対応
pub struct ResourceRoute {
    pub prefix: &'static str,
    /// `/api/{prefix}/` (list / create)
    pub collection: fn() -> MethodRouter<AppState>,
    /// `/api/{prefix}/{id}/` (retrieve / update / delete)
    pub detail: fn() -> MethodRouter<AppState>,
}

impl ResourceRoute {
    pub fn collection_path(&self) -> String {
        format!("/api/{}/", self.prefix)
    }

    pub fn detail_path(&self) -> String {
        format!("/api/{}/{{id}}/", self.prefix)
    }
}

pub const RESOURCES: &[ResourceRoute] = &[
    ResourceRoute {
        prefix: "users",
        collection: user_handler::collection_routes,
        detail: user_handler::detail_routes,
    },
    ResourceRoute {
        prefix: "teams",
        collection: team_handler::collection_routes,
        detail: team_handler::detail_routes,
    },
    ResourceRoute {
        prefix: "activities",
        collection: activity_handler::collection_routes,
        detail: activity_handler::detail_routes,
    },
    ResourceRoute {
        prefix: "workouts",
        collection: workout_handler::collection_routes,
        detail: workout_handler::detail_routes,
    },
    ResourceRoute {
        prefix: "leaderboard",
        collection: leaderboard_handler::collection_routes,
        detail: leaderboard_handler::detail_routes,
    },
];

// スラッシュなしでも 308 でスラッシュ付きへ転送するパス
const SLASHED_PATHS: &[&str] = &["/docs", "/api", "/api/health", "/api/cors"];

/// 末尾にスラッシュを付ければルートに一致するパスなら、その転送先を返す
pub fn slash_redirect_target(path: &str) -> Option<String> {
    if path.ends_with('/') {
        return None;
    }
    if SLASHED_PATHS.contains(&path) || is_resource_path(path) {
        Some(format!("{}/", path))
    } else {
        None
    }
}

fn is_resource_path(path: &str) -> bool {
    let Some(rest) = path.strip_prefix("/api/") else {
        return false;
    };
    let known = |prefix: &str| RESOURCES.iter().any(|r| r.prefix == prefix);
    match rest.split('/').collect::<Vec<_>>().as_slice() {
        [prefix] => known(prefix),
        [prefix, id] => known(prefix) && !id.is_empty(),
        _ => false,
    }
}

/// リソースルートとルート/ヘルスのエンドポイント（ミドルウェアなし）
pub fn api_router() -> Router<AppState> {
    let router = RESOURCES.iter().fold(Router::new(), |router, resource| {
        router
            .route(&resource.collection_path(), (resource.collection)())
            .route(&resource.detail_path(), (resource.detail)())
    });

    router
        .route("/", get(system_handler::api_root_handler))
        .route("/docs/", get(system_handler::api_root_handler))
        .route("/api/", get(system_handler::resource_index_handler))
        .route("/api/health/", get(system_handler::health_check_handler))
        .fallback(system_handler::fallback_handler)
}

/// アプリケーション全体のルーターを組み立てる
pub fn build_app(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config);

    // CorsLayer は OPTIONS をすべて自前で応答するため、/api/cors/ はレイヤーの後に登録する
    api_router()
        .layer(cors)
        .route("/api/cors/", any(system_handler::cors_preflight_handler))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
