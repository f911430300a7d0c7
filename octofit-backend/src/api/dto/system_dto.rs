// src/api/dto/system_dto.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// GET /api/health/ のレスポンス
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub codespace: String,
    pub backend_url: String,
    pub frontend_url: String,
}

/// GET / と GET /docs/ のレスポンス
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiRootResponse {
    pub message: String,
    pub version: String,
    pub environment: String,
    pub backend_url: String,
    pub frontend_url: String,
    pub endpoints: EndpointDirectory,
    pub documentation: DocumentationLinks,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EndpointDirectory {
    pub users: String,
    pub teams: String,
    pub activities: String,
    pub workouts: String,
    pub leaderboard: String,
    pub health: String,
    pub admin: String,
}

/// GET /api/ のレスポンス（リソース名 → コレクションURL）
pub type ResourceIndexResponse = BTreeMap<String, String>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DocumentationLinks {
    pub api_root: String,
    pub admin_panel: String,
    pub browsable_api: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CorsStatusResponse {
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MethodNotAllowedResponse {
    pub error: String,
}
