//! メインアプリケーションコンポーネント
//!
//! 2つの画面は状態を共有しない。画面遷移は通常のリンクで行い、
//! ページ読み込みごとに空の状態から始まる。

use leptos::prelude::*;
use person_detect_common::BackendConfig;
use crate::components::{
    history_screen::HistoryScreen,
    upload_screen::UploadScreen,
};

/// 表示する画面
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Route {
    Upload,
    History,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/history" => Route::History,
            _ => Route::Upload,
        }
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    let config = BackendConfig::default();

    match Route::from_path(&current_path()) {
        Route::Upload => view! { <UploadScreen config=config /> }.into_any(),
        Route::History => view! { <HistoryScreen config=config /> }.into_any(),
    }
}
