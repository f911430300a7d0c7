// src/db.rs
use crate::config::AppConfig;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

pub type DbPool = DatabaseConnection;

pub async fn create_db_pool(config: &AppConfig) -> Result<DbPool, DbErr> {
    Database::connect(connect_options(&config.database_url)).await
}

/// 接続URLに応じたプール設定
pub fn connect_options(database_url: &str) -> ConnectOptions {
    let mut opt = ConnectOptions::new(database_url.to_string());

    if is_sqlite(database_url) {
        // インメモリDBは接続ごとに別のDBになるため、接続を1本に固定する
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(100)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(8))
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(8))
            .max_lifetime(Duration::from_secs(8 * 60));
    }

    opt.sqlx_logging(false);
    opt
}

/// 未適用のマイグレーションをすべて実行する
pub async fn run_migrations(conn: &DbPool) -> Result<(), DbErr> {
    info!("Running migrations...");
    Migrator::up(conn, None).await?;
    info!("Migrations finished.");
    Ok(())
}

fn is_sqlite(database_url: &str) -> bool {
    database_url.starts_with("sqlite:")
}
