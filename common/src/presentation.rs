//! 表示モードに応じた要約の選択

use crate::types::{AnalysisResult, SummaryEntry, SummaryViewMode};

/// 描画する要約
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryView {
    /// 該当データなし（何も描画しない）
    Empty,
    /// 最終要約
    Full(String),
    /// セクション別・画像別の要約（出現順）
    Entries(Vec<SummaryEntry>),
}

impl SummaryView {
    pub fn is_empty(&self) -> bool {
        matches!(self, SummaryView::Empty)
    }
}

/// (結果, 表示モード) から描画内容を決める
///
/// 通信は行わない。モードに対応するデータが無ければ `Empty`（空文字の最終要約も含む）。
pub fn select_view(result: &AnalysisResult, mode: SummaryViewMode) -> SummaryView {
    let summary = &result.summary;
    match mode {
        SummaryViewMode::Full => match &summary.final_summary {
            Some(text) if !text.trim().is_empty() => SummaryView::Full(text.clone()),
            _ => SummaryView::Empty,
        },
        SummaryViewMode::Section => entries_or_empty(&summary.section_summaries),
        SummaryViewMode::Image => entries_or_empty(&summary.image_summaries),
    }
}

/// 表示モード切替時の通知文
pub fn mode_switched_message(mode: SummaryViewMode) -> String {
    format!("Switched to {} summary", mode)
}

fn entries_or_empty(entries: &[SummaryEntry]) -> SummaryView {
    if entries.is_empty() {
        SummaryView::Empty
    } else {
        SummaryView::Entries(entries.to_vec())
    }
}
