//! 検索フォームコンポーネント
//!
//! 入力欄は draft にのみ結び付く。入力中はリクエストを送らない。

use leptos::prelude::*;
use person_detect_common::{QueryField, QueryState};

#[component]
pub fn SearchForm<FE, FS, FR>(
    draft: Memo<QueryState>,
    on_edit: FE,
    on_search: FS,
    on_reset: FR,
) -> impl IntoView
where
    FE: Fn(QueryField, String) + 'static + Clone,
    FS: Fn(()) + 'static + Clone,
    FR: Fn(()) + 'static + Clone,
{
    let value = move |field: QueryField| move || draft.with(|d| d.field(field).to_string());

    let edit = move |field: QueryField| {
        let on_edit = on_edit.clone();
        move |ev: leptos::ev::Event| on_edit(field, event_target_value(&ev))
    };

    view! {
        <form
            class="search-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_search(());
            }
        >
            <div class="form-group">
                <input
                    type="text"
                    placeholder="Search by image name"
                    prop:value=value(QueryField::SearchText)
                    on:input=edit(QueryField::SearchText)
                />
            </div>
            <div class="form-group">
                <label>
                    "Start Date & Time: "
                    <input
                        type="datetime-local"
                        prop:value=value(QueryField::StartTime)
                        on:input=edit(QueryField::StartTime)
                    />
                </label>
            </div>
            <div class="form-group">
                <label>
                    "End Date & Time: "
                    <input
                        type="datetime-local"
                        prop:value=value(QueryField::EndTime)
                        on:input=edit(QueryField::EndTime)
                    />
                </label>
            </div>
            <div class="form-actions">
                <button type="submit" class="btn btn-primary">"Search"</button>
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| on_reset(())
                >
                    "Reset"
                </button>
            </div>
        </form>
    }
}
