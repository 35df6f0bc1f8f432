//! 端末表示テスト

use paper_summary::render::render_view;
use paper_summary_common::{select_view, AnalysisResult, SummaryEntry, SummaryPayload, SummaryViewMode};

fn sample() -> AnalysisResult {
    AnalysisResult {
        file_name: "attention.pdf".into(),
        summary: SummaryPayload {
            final_summary: Some("Transformers replace recurrence.".into()),
            section_summaries: vec![
                SummaryEntry::new("Introduction", "Sequence models."),
                SummaryEntry::new("Model", "Multi-head attention."),
            ],
            image_summaries: vec![],
        },
        preview_url: None,
    }
}

#[test]
fn test_render_full() {
    let result = sample();
    let text = render_view(&select_view(&result, SummaryViewMode::Full), SummaryViewMode::Full);
    assert_eq!(text, "Transformers replace recurrence.\n");
}

#[test]
fn test_render_sections_in_order() {
    let result = sample();
    let text = render_view(&select_view(&result, SummaryViewMode::Section), SummaryViewMode::Section);

    let intro = text.find("## Introduction").expect("Introduction missing");
    let model = text.find("## Model").expect("Model missing");
    assert!(intro < model);
    assert!(text.contains("Multi-head attention."));
}

#[test]
fn test_render_empty_mode() {
    let result = sample();
    let text = render_view(&select_view(&result, SummaryViewMode::Image), SummaryViewMode::Image);
    assert!(text.contains("image summary"));
}
