// src/config/app.rs
use super::codespace::CodespaceConfig;
use dotenvy::dotenv;
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub cors_allowed_origins: Vec<String>,
    /// 起動時に未適用のマイグレーションを実行するか
    pub auto_migrate: bool,
    pub codespace: CodespaceConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        let codespace = CodespaceConfig::from_env();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| "Invalid PORT value")?,
            database_url: env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            cors_allowed_origins: parse_origins(
                env::var("CORS_ALLOWED_ORIGINS").ok(),
                &codespace,
            ),
            auto_migrate: env::var("AUTO_MIGRATE")
                .map_or(true, |v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "no")),
            codespace,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// テスト用の設定を作成（環境変数には依存しない）
    pub fn for_testing() -> Self {
        let codespace = CodespaceConfig::localhost();
        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8000,
            database_url: "sqlite::memory:".to_string(),
            cors_allowed_origins: parse_origins(None, &codespace),
            auto_migrate: true,
            codespace,
        }
    }

    /// codespace 名を差し替えた設定を返す
    pub fn with_codespace(mut self, name: Option<&str>) -> Self {
        self.codespace = CodespaceConfig::new(name.map(str::to_string));
        self.cors_allowed_origins = parse_origins(None, &self.codespace);
        self
    }
}

/// 未指定ならフロントエンドURLのみを許可する
fn parse_origins(raw: Option<String>, codespace: &CodespaceConfig) -> Vec<String> {
    let origins: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() {
        vec![codespace.frontend_url()]
    } else {
        origins
    }
}
