//! PDFプレビュー

use leptos::prelude::*;

#[component]
pub fn PdfViewer(url: Signal<Option<String>>, file_name: Signal<String>) -> impl IntoView {
    view! {
        <div class="pdf-viewer">
            {move || match url.get() {
                Some(url) => {
                    let embed_url = url.clone();
                    view! {
                    <object data=url type="application/pdf" class="pdf-frame" title=file_name.get()>
                        <embed src=embed_url type="application/pdf" class="pdf-frame" />
                    </object>
                    }
                    .into_any()
                }
                None => view! { <p class="text-muted">"Preview unavailable"</p> }.into_any(),
            }}
        </div>
    }
}
