//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use paper_summary_common::{
    copy_text, select_view, speak_text, AnalysisBackend, AnalysisResult, ClientConfig, DragEventKind,
    Notice, Notifier, ResponseSchema, Session, SummaryView, SummaryViewMode, ToastQueue, UploadState,
};
use web_sys::File;

use crate::api::analyze::FetchBackend;
use crate::components::{
    header::{Header, PAGE_TITLE},
    loading_spinner::LoadingSpinner,
    pdf_viewer::PdfViewer,
    settings_panel::SettingsPanel,
    summary_panel::SummaryPanel,
    toast_list::ToastList,
    upload_area::UploadArea,
};
use crate::platform::{self, BrowserClipboard, BrowserFile, BrowserSpeech, ToastNotifier};
use crate::settings;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let initial = settings::load();

    // 状態の本体（プレビューURLを持つのでスレッドローカル）
    let session = StoredValue::new_local(Session::new(initial.schema));

    // 描画用のミラー
    let (state, set_state) = signal(UploadState::Idle);
    let (result, set_result) = signal(None::<AnalysisResult>);
    let (view_mode, set_view_mode) = signal(SummaryViewMode::Full);

    let config = RwSignal::new(initial.clone());
    let (endpoint, set_endpoint) = signal(initial.endpoint.clone());
    let (schema, set_schema) = signal(initial.schema);
    let (settings_status, set_settings_status) = signal(String::new());

    let toasts = RwSignal::new(ToastQueue::new(initial.toast_capacity));
    let notifier = ToastNotifier::new(toasts, initial.toast_duration_ms);

    let sync = move || {
        session.with_value(|s| {
            let next_state = s.state();
            if state.get_untracked() != next_state {
                set_state.set(next_state);
            }
            let next_result = s.result().cloned();
            if result.with_untracked(|current| *current != next_result) {
                set_result.set(next_result);
            }
            let next_mode = s.view_mode();
            if view_mode.get_untracked() != next_mode {
                set_view_mode.set(next_mode);
            }
        });
    };

    // ファイル受付 → 送信 → 反映
    let on_file = move |file: File| {
        let file = BrowserFile::new(file);
        let accepted = session.try_update_value(|s| s.begin_upload(&file, &notifier));
        sync();

        let Some(Ok(ticket)) = accepted else {
            return;
        };

        let backend = FetchBackend::from_config(&config.get_untracked());
        spawn_local(async move {
            let reply = backend.send(&file).await;
            session.update_value(|s| {
                s.complete_upload(ticket, reply, &notifier, || platform::create_preview(&file));
            });
            sync();
        });
    };

    let on_drag = move |event: DragEventKind| {
        session.update_value(|s| {
            s.handle_drag(event);
        });
        sync();
    };

    let on_cancel = move |_| {
        session.update_value(|s| {
            s.cancel(&notifier);
        });
        sync();
    };

    let on_home = move |_| {
        session.update_value(|s| s.reset());
        sync();
    };

    let on_mode = move |mode: SummaryViewMode| {
        session.update_value(|s| s.set_view_mode(mode, &notifier));
        sync();
    };

    let on_copy = move |text: String| {
        spawn_local(async move {
            copy_text(&BrowserClipboard, &notifier, &text).await;
        });
    };

    let on_speak = move |text: String| speak_text(&BrowserSpeech, &text);

    let on_save_settings = move |_| {
        let next = ClientConfig {
            endpoint: endpoint.get_untracked().trim().to_string(),
            schema: schema.get_untracked(),
            ..config.get_untracked()
        };
        match settings::save(&next) {
            Ok(()) => {
                session.update_value(|s| s.set_schema(next.schema));
                config.set(next);
                set_settings_status.set("Saved".to_string());
            }
            Err(e) => {
                log::error!("{}", e);
                notifier.notify(Notice::error(e));
            }
        }
    };

    let on_reset_settings = move |_| {
        settings::clear();
        let defaults = ClientConfig::default();
        set_endpoint.set(defaults.endpoint.clone());
        set_schema.set(defaults.schema);
        session.update_value(|s| s.set_schema(defaults.schema));
        config.set(defaults);
        set_settings_status.set("Restored defaults".to_string());
    };

    // 保存前でもスキーマ選択に合わせて既定エンドポイントを追従させる
    Effect::new(move |previous: Option<ResponseSchema>| {
        let current = schema.get();
        if let Some(previous) = previous {
            if previous != current && endpoint.get_untracked() == previous.default_endpoint() {
                set_endpoint.set(current.default_endpoint().to_string());
            }
        }
        current
    });

    let summary = Signal::derive(move || {
        result.with(|r| match r {
            Some(r) => select_view(r, view_mode.get()),
            None => SummaryView::Empty,
        })
    });
    let file_name = Signal::derive(move || result.with(|r| r.as_ref().map(|r| r.file_name.clone()).unwrap_or_default()));
    let preview_url = Signal::derive(move || result.with(|r| r.as_ref().and_then(|r| r.preview_url.clone())));

    view! {
        <div class="container">
            <Show
                when=move || result.with(|r| r.is_some())
                fallback=move || view! {
                    <div class="upload-page">
                        <h1 class="page-title">{PAGE_TITLE}</h1>

                        <SettingsPanel
                            endpoint=endpoint
                            set_endpoint=set_endpoint
                            schema=schema
                            set_schema=set_schema
                            status=settings_status
                            on_save=on_save_settings
                            on_reset=on_reset_settings
                        />

                        <UploadArea state=state on_drag=on_drag on_file=on_file />

                        <Show when=move || state.get() == UploadState::Uploading>
                            <LoadingSpinner on_cancel=on_cancel />
                        </Show>
                    </div>
                }
            >
                <div class="result-page">
                    <Header file_name=file_name on_home=on_home />
                    <div class="result-body">
                        <PdfViewer url=preview_url file_name=file_name />
                        <SummaryPanel
                            summary=summary
                            mode=view_mode
                            on_mode=on_mode
                            on_copy=on_copy
                            on_speak=on_speak
                        />
                    </div>
                </div>
            </Show>

            <ToastList toasts=toasts />
        </div>
    }
}
