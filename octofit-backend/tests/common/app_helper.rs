// tests/common/app_helper.rs

use axum::Router;
use octofit_backend::{build_app, config::AppConfig, AppState};

use crate::common::db::TestDatabase;

/// 既定のテスト設定（codespace なし）でアプリをセットアップ
pub async fn setup_app() -> (Router, TestDatabase) {
    setup_app_with_config(AppConfig::for_testing()).await
}

pub async fn setup_app_with_config(config: AppConfig) -> (Router, TestDatabase) {
    let db = TestDatabase::new().await;
    let app = build_app(AppState::new(db.connection.clone(), config));
    (app, db)
}

/// サービス層のテスト用に AppState だけを組み立てる
pub async fn setup_state() -> (AppState, TestDatabase) {
    let db = TestDatabase::new().await;
    let state = AppState::new(db.connection.clone(), AppConfig::for_testing());
    (state, db)
}
