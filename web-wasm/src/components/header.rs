//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(
    title: &'static str,
    /// もう一方の画面へのリンク先
    link_href: &'static str,
    link_label: &'static str,
) -> impl IntoView {
    view! {
        <header class="header">
            <h1>{title}</h1>
            <nav>
                <a class="nav-link" href=link_href>{link_label}</a>
            </nav>
        </header>
    }
}
