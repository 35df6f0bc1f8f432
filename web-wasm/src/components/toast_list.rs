//! トースト表示

use leptos::prelude::*;
use paper_summary_common::ToastQueue;

#[component]
pub fn ToastList(toasts: RwSignal<ToastQueue>) -> impl IntoView {
    view! {
        <div class="toast-container" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|queue| queue.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast toast-{}", toast.notice.kind.as_str())
                            on:click=move |_| {
                                toasts.update(|queue| {
                                    queue.dismiss(id);
                                });
                            }
                        >
                            {toast.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
