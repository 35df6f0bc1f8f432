//! アップロードエリアコンポーネント

use leptos::prelude::*;
use paper_summary_common::{first_file, DragEventKind, UploadState};
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

/// FileListの先頭だけを返す
fn first_of(files: &FileList) -> Option<File> {
    first_file((0..files.length()).filter_map(|i| files.get(i)))
}

#[component]
pub fn UploadArea<FD, FF>(
    state: ReadSignal<UploadState>,
    on_drag: FD,
    on_file: FF,
) -> impl IntoView
where
    FD: Fn(DragEventKind) + 'static + Clone,
    FF: Fn(File) + 'static + Clone,
{
    let handle_drag = {
        let on_drag = on_drag.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            if let Some(kind) = DragEventKind::from_dom_type(&ev.type_()) {
                on_drag(kind);
            }
        }
    };

    let on_drop = {
        let on_drag = on_drag.clone();
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            on_drag(DragEventKind::Drop);

            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| first_of(&files));
            if let Some(file) = file {
                on_file(file);
            }
        }
    };

    let on_change = {
        let on_file = on_file.clone();
        move |ev: Event| {
            let input: HtmlInputElement = event_target(&ev);
            let file = input.files().and_then(|files| first_of(&files));
            // 同じファイルを選び直せるようにする
            input.set_value("");
            if let Some(file) = file {
                on_file(file);
            }
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if state.get() == UploadState::Dragging {
                    classes.push("dragover");
                }
                classes.join(" ")
            }
            on:dragenter=handle_drag.clone()
            on:dragover=handle_drag.clone()
            on:dragleave=handle_drag
            on:drop=on_drop
        >
            <div class="upload-icon">"📄"</div>
            <p>"Drag and drop your research paper here"</p>
            <span class="text-muted">"or"</span>
            <label class="btn btn-primary">
                "Browse Files"
                <input type="file" class="hidden" accept=".pdf" on:change=on_change />
            </label>
        </div>
    }
}
