//! 解析中スピナー

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner<FC>(on_cancel: FC) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone,
{
    view! {
        <div class="loading-container">
            <div class="spinner" />
            <p class="loading-text">"Analyzing your research paper..."</p>
            <button
                class="btn btn-tertiary btn-small"
                on:click={
                    let on_cancel = on_cancel.clone();
                    move |_| on_cancel(())
                }
            >
                "Cancel"
            </button>
        </div>
    }
}
