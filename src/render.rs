//! 要約の端末表示

use crate::error::Result;
use dialoguer::Select;
use paper_summary_common::{
    mode_switched_message, select_view, AnalysisResult, Notice, Notifier, SummaryView, SummaryViewMode,
};

/// 描画内容をテキストにする
pub fn render_view(view: &SummaryView, mode: SummaryViewMode) -> String {
    match view {
        SummaryView::Empty => format!("({} summary はありません)\n", mode),
        SummaryView::Full(text) => format!("{}\n", text),
        SummaryView::Entries(entries) => entries
            .iter()
            .map(|entry| format!("## {}\n{}\n", entry.label, entry.text))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// ヘッダー付きで1回分を表示
pub fn print_result(result: &AnalysisResult, mode: SummaryViewMode) {
    println!("📄 {} - {}\n", result.file_name, mode.label());
    print!("{}", render_view(&select_view(result, mode), mode));
}

/// 表示モードを対話的に切り替える（Escで終了）
pub fn browse<N: Notifier + ?Sized>(
    result: &AnalysisResult,
    initial: SummaryViewMode,
    notifier: &N,
) -> Result<()> {
    let labels: Vec<&str> = SummaryViewMode::ALL.iter().map(|m| m.label()).collect();
    let mut mode = initial;

    loop {
        print_result(result, mode);
        println!();

        let current = SummaryViewMode::ALL.iter().position(|m| *m == mode).unwrap_or(0);
        let selection = Select::new()
            .with_prompt("表示モード (Escで終了)")
            .items(&labels)
            .default(current)
            .interact_opt()?;

        match selection {
            Some(index) => {
                mode = SummaryViewMode::ALL[index];
                notifier.notify(Notice::info(mode_switched_message(mode)));
            }
            None => return Ok(()),
        }
    }
}
