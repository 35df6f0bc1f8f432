//! ヘッダーコンポーネント

use leptos::prelude::*;

pub const PAGE_TITLE: &str = "Research Paper Analysis";

/// 結果画面のヘッダー（ホーム、ファイル名、タイトル）
#[component]
pub fn Header<FH>(file_name: Signal<String>, on_home: FH) -> impl IntoView
where
    FH: Fn(()) + 'static + Clone,
{
    view! {
        <header class="header">
            <div class="header-left">
                <button
                    class="btn btn-icon"
                    title="Home"
                    on:click={
                        let on_home = on_home.clone();
                        move |_| on_home(())
                    }
                >
                    "🏠"
                </button>
                <span class="file-name">{move || file_name.get()}</span>
            </div>
            <h1 class="header-title">{PAGE_TITLE}</h1>
            <div class="header-right"></div>
        </header>
    }
}
