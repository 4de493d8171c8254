//! ページ送りコンポーネント

use leptos::prelude::*;
use person_detect_common::Pagination;

#[component]
pub fn PaginationControls<FP, FN>(
    pagination: Memo<Pagination>,
    on_previous: FP,
    on_next: FN,
) -> impl IntoView
where
    FP: Fn(()) + 'static + Clone,
    FN: Fn(()) + 'static + Clone,
{
    view! {
        <div class="pagination">
            <button
                class="btn btn-secondary"
                disabled=move || !pagination.get().has_previous()
                on:click=move |_| on_previous(())
            >
                "Previous"
            </button>
            <span class="page-label">{move || format!("Page {}", pagination.get().page)}</span>
            <button
                class="btn btn-secondary"
                disabled=move || !pagination.get().has_next()
                on:click=move |_| on_next(())
            >
                "Next"
            </button>
        </div>
    }
}
