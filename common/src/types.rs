//! 解析結果と画面状態の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - UploadFile: ユーザーが選択したファイル
//! - SummaryPayload: サーバーが返した要約（正規化済み）
//! - AnalysisResult: 画面に表示する最終結果
//! - UploadState / SummaryViewMode: 画面状態

use serde::{Deserialize, Serialize};

/// ユーザーが選択したファイル
///
/// ブラウザでは `web_sys::File`、CLIではローカルファイルが実装する。
pub trait UploadFile {
    fn name(&self) -> String;

    /// 宣言されたMIMEタイプ（空文字列の場合あり）
    fn media_type(&self) -> String;
}

/// MIMEタイプがPDFを示すか
pub fn is_pdf_media_type(media_type: &str) -> bool {
    media_type.to_ascii_lowercase().contains("pdf")
}

/// 見出し付きの要約1件（セクション名または画像ラベル）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub label: String,
    pub text: String,
}

impl SummaryEntry {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// サーバーレスポンスを正規化した要約
///
/// セクション・画像の要約はレスポンス中の出現順を保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryPayload {
    pub final_summary: Option<String>,
    pub section_summaries: Vec<SummaryEntry>,
    pub image_summaries: Vec<SummaryEntry>,
}

/// 解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub file_name: String,

    pub summary: SummaryPayload,

    /// プレビュー用URL（ブラウザではblob URL）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

/// アップロード画面の状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    Dragging,
    Uploading,
    Ready,
    Failed,
}

impl UploadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadState::Idle => "idle",
            UploadState::Dragging => "dragging",
            UploadState::Uploading => "uploading",
            UploadState::Ready => "ready",
            UploadState::Failed => "failed",
        }
    }
}

/// 要約の表示モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryViewMode {
    #[default]
    Full,
    Section,
    Image,
}

impl SummaryViewMode {
    pub const ALL: [SummaryViewMode; 3] = [
        SummaryViewMode::Full,
        SummaryViewMode::Section,
        SummaryViewMode::Image,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryViewMode::Full => "full",
            SummaryViewMode::Section => "section",
            SummaryViewMode::Image => "image",
        }
    }

    /// ボタン表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            SummaryViewMode::Full => "Full Summary",
            SummaryViewMode::Section => "Section Summary",
            SummaryViewMode::Image => "Image Summary",
        }
    }
}

impl std::fmt::Display for SummaryViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SummaryViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" | "f" => Ok(SummaryViewMode::Full),
            "section" | "sections" | "s" => Ok(SummaryViewMode::Section),
            "image" | "images" | "i" => Ok(SummaryViewMode::Image),
            _ => Err(format!("Unknown view mode: {}. Use full, section, or image", s)),
        }
    }
}
