//! 要約パネル（表示モード切替 + 要約本文）

use leptos::prelude::*;
use paper_summary_common::{SummaryView, SummaryViewMode};

#[component]
pub fn SummaryPanel<FM, FC, FS>(
    summary: Signal<SummaryView>,
    mode: ReadSignal<SummaryViewMode>,
    on_mode: FM,
    on_copy: FC,
    on_speak: FS,
) -> impl IntoView
where
    FM: Fn(SummaryViewMode) + 'static + Clone,
    FC: Fn(String) + 'static + Clone + Send + Sync,
    FS: Fn(String) + 'static + Clone + Send + Sync,
{
    let buttons = SummaryViewMode::ALL
        .into_iter()
        .map(|m| {
            let on_mode = on_mode.clone();
            view! {
                <button
                    class=move || if mode.get() == m { "btn btn-primary" } else { "btn btn-secondary" }
                    on:click=move |_| on_mode(m)
                >
                    {m.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="summary-panel">
            <div class="mode-buttons">{buttons}</div>

            <div class="summary-content">
                <h3>"Summary"</h3>
                {move || {
                    let on_copy = on_copy.clone();
                    let on_speak = on_speak.clone();
                    match summary.get() {
                        SummaryView::Empty => ().into_any(),
                        SummaryView::Full(text) => view! {
                            <SummaryCard text=text on_copy=on_copy on_speak=on_speak />
                        }
                        .into_any(),
                        SummaryView::Entries(entries) => entries
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <SummaryCard
                                        label=entry.label
                                        text=entry.text
                                        on_copy=on_copy.clone()
                                        on_speak=on_speak.clone()
                                    />
                                }
                            })
                            .collect_view()
                            .into_any(),
                    }
                }}
            </div>
        </div>
    }
}

/// 要約1件とコピー・読み上げボタン
#[component]
fn SummaryCard<FC, FS>(
    #[prop(optional)] label: Option<String>,
    text: String,
    on_copy: FC,
    on_speak: FS,
) -> impl IntoView
where
    FC: Fn(String) + 'static + Clone,
    FS: Fn(String) + 'static + Clone,
{
    let copy_text = text.clone();
    let speak_text = text.clone();

    view! {
        <div class="summary-card">
            {label.map(|label| view! { <h4>{label}</h4> })}
            <p>{text}</p>
            <div class="summary-actions">
                <button
                    class="btn btn-icon"
                    title="Copy"
                    on:click=move |_| on_copy(copy_text.clone())
                >
                    "📋"
                </button>
                <button
                    class="btn btn-icon"
                    title="Read aloud"
                    on:click=move |_| on_speak(speak_text.clone())
                >
                    "🔊"
                </button>
            </div>
        </div>
    }
}
