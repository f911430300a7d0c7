// src/config/codespace.rs
use std::env;

pub const LOCAL_BACKEND_URL: &str = "http://localhost:8000";
pub const LOCAL_FRONTEND_URL: &str = "http://localhost:3000";

const BACKEND_PORT: u16 = 8000;
const FRONTEND_PORT: u16 = 3000;

/// GitHub Codespaces 上で動作しているかどうかと、それに応じたベースURL
///
/// `CODESPACE_NAME` が設定されていれば `https://{name}-{port}.app.github.dev`、
/// なければ localhost のURLを使う。起動時に一度だけ読み込み、リクエストごとには読まない。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodespaceConfig {
    pub name: Option<String>,
}

impl CodespaceConfig {
    pub fn from_env() -> Self {
        Self::new(env::var("CODESPACE_NAME").ok())
    }

    /// 空文字は未設定として扱う
    pub fn new(name: Option<String>) -> Self {
        Self {
            name: name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        }
    }

    pub fn localhost() -> Self {
        Self { name: None }
    }

    pub fn is_codespace(&self) -> bool {
        self.name.is_some()
    }

    /// "codespace" または "localhost"
    pub fn environment_label(&self) -> &'static str {
        if self.is_codespace() {
            "codespace"
        } else {
            "localhost"
        }
    }

    /// ヘルスチェックで返す codespace 名（未設定なら "localhost"）
    pub fn codespace_label(&self) -> &str {
        self.name.as_deref().unwrap_or("localhost")
    }

    pub fn backend_url(&self) -> String {
        self.url_for_port(BACKEND_PORT, LOCAL_BACKEND_URL)
    }

    pub fn frontend_url(&self) -> String {
        self.url_for_port(FRONTEND_PORT, LOCAL_FRONTEND_URL)
    }

    fn url_for_port(&self, port: u16, local: &str) -> String {
        match &self.name {
            Some(name) => format!("https://{}-{}.app.github.dev", name, port),
            None => local.to_string(),
        }
    }
}
