//! 設定パネルコンポーネント

use leptos::prelude::*;
use paper_summary_common::ResponseSchema;

#[component]
pub fn SettingsPanel<FS, FR>(
    endpoint: ReadSignal<String>,
    set_endpoint: WriteSignal<String>,
    schema: ReadSignal<ResponseSchema>,
    set_schema: WriteSignal<ResponseSchema>,
    status: ReadSignal<String>,
    on_save: FS,
    on_reset: FR,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone,
    FR: Fn(()) + 'static + Clone,
{
    view! {
        <details class="settings-panel">
            <summary>"Settings"</summary>
            <div class="settings-grid">
                <div class="form-group">
                    <label for="endpoint">"Analysis endpoint"</label>
                    <input
                        type="url"
                        id="endpoint"
                        prop:value=move || endpoint.get()
                        on:input=move |ev| {
                            set_endpoint.set(event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="schema">"Response schema"</label>
                    <select
                        id="schema"
                        on:change=move |ev| {
                            let value = event_target_value(&ev).parse().unwrap_or_default();
                            set_schema.set(value);
                        }
                    >
                        <option value="canonical" selected=move || schema.get() == ResponseSchema::Canonical>
                            "canonical (final / section / image)"
                        </option>
                        <option value="legacy" selected=move || schema.get() == ResponseSchema::Legacy>
                            "legacy (summaries)"
                        </option>
                    </select>
                </div>

                <div class="settings-actions">
                    <button
                        class="btn btn-primary btn-small"
                        on:click={
                            let on_save = on_save.clone();
                            move |_| on_save(())
                        }
                    >
                        "Save"
                    </button>
                    <button
                        class="btn btn-tertiary btn-small"
                        on:click={
                            let on_reset = on_reset.clone();
                            move |_| on_reset(())
                        }
                    >
                        "Reset"
                    </button>
                    <span class="settings-status">{move || status.get()}</span>
                </div>
            </div>
        </details>
    }
}
