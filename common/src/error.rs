//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Response parse error: {0}")]
    Parse(String),

    #[error("Unsupported response schema version: {0}")]
    UnsupportedSchema(u32),

    #[error("Server returned HTTP {status}")]
    Http { status: u16 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Speech error: {0}")]
    Speech(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
