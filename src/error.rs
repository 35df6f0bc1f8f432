use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaperSummaryError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("アップロードを受け付けませんでした: {0}")]
    Rejected(#[from] paper_summary_common::UploadRejection),

    #[error("解析に失敗しました: {0}")]
    Analysis(#[from] paper_summary_common::Error),

    #[error("解析がキャンセルされました")]
    Cancelled,

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, PaperSummaryError>;
