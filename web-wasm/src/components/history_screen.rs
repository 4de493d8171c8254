//! 検出履歴画面
//!
//! 確定済み条件が変わる操作（検索・リセット・ページ移動）だけが
//! `dispatch` を通じてリクエストを送る。

use leptos::prelude::*;
use leptos::task::spawn_local;
use person_detect_common::{Applied, BackendConfig, FetchRequest, HistoryState, QueryField};
use crate::api::{fetch_history, log_request_error};
use crate::components::{
    header::Header,
    history_table::HistoryTable,
    pagination_controls::PaginationControls,
    search_form::SearchForm,
};

#[component]
pub fn HistoryScreen(config: BackendConfig) -> impl IntoView {
    let state = RwSignal::new(HistoryState::new());
    let table_config = config.clone();
    let config = StoredValue::new(config);

    let dispatch = move |request: FetchRequest| {
        let config = config.get_value();
        spawn_local(async move {
            let response = fetch_history(&config, &request.query).await;
            state.update(|s| {
                if let Applied::Failed(err) = s.apply_response(request.token, response) {
                    log_request_error("history fetch failed", &err);
                }
            });
        });
    };

    // 状態を更新し、リクエストが返ればそれを送る
    let run = move |action: fn(&mut HistoryState) -> Option<FetchRequest>| {
        if let Some(request) = state.try_update(action).flatten() {
            dispatch(request);
        }
    };

    run(|s| Some(s.initial_fetch()));

    let draft = Memo::new(move |_| state.with(|s| s.draft().clone()));
    let records = Memo::new(move |_| state.with(|s| s.records().to_vec()));
    let pagination = Memo::new(move |_| state.with(|s| s.pagination()));

    let on_edit = move |field: QueryField, value: String| {
        state.update(|s| s.update_draft(field, value));
    };

    view! {
        <div class="container">
            <Header title="Detection History" link_href="/" link_label="Back to Upload" />

            <SearchForm
                draft=draft
                on_edit=on_edit
                on_search=move |_| run(|s| Some(s.commit_search()))
                on_reset=move |_| run(|s| Some(s.reset_search()))
            />

            <HistoryTable records=records config=table_config />

            <PaginationControls
                pagination=pagination
                on_previous=move |_| run(HistoryState::previous_page)
                on_next=move |_| run(HistoryState::next_page)
            />
        </div>
    }
}
