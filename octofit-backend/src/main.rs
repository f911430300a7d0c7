// src/main.rs
use octofit_backend::config::AppConfig;
use octofit_backend::db::{create_db_pool, run_migrations};
use octofit_backend::{build_app, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 設定を読み込む（.env もここで読まれるので、トレーシングより先に行う）
    let app_config = AppConfig::from_env()?;

    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "octofit_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting OctoFit Tracker backend...");
    tracing::info!(
        environment = %app_config.environment,
        codespace = %app_config.codespace.codespace_label(),
        backend_url = %app_config.codespace.backend_url(),
        frontend_url = %app_config.codespace.frontend_url(),
        "Configuration loaded"
    );

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config).await?;
    tracing::info!("Database pool created successfully.");

    if app_config.auto_migrate {
        run_migrations(&db_pool).await?;
    } else {
        tracing::info!("AUTO_MIGRATE is disabled; skipping migrations");
    }

    let server_addr = app_config.server_addr();
    let app_router = build_app(AppState::new(db_pool, app_config));

    // サーバーの起動
    let listener = TcpListener::bind(&server_addr).await?;
    tracing::info!("Router configured. Server listening on {}", server_addr);

    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
