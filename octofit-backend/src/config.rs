// src/config.rs
pub mod app;
pub mod codespace;

pub use app::AppConfig;
pub use codespace::CodespaceConfig;
