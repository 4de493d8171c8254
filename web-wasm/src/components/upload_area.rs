//! ファイル選択エリアコンポーネント
//!
//! クリックでの選択とドラッグ&ドロップの両方に対応。先頭の1ファイルのみ扱う。

use leptos::prelude::*;
use web_sys::{DragEvent, File, FileList, HtmlInputElement};

#[component]
pub fn UploadArea<F>(
    selected_name: Memo<Option<String>>,
    on_file_selected: F,
) -> impl IntoView
where
    F: Fn(Option<File>) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_change = {
        let on_file_selected = on_file_selected.clone();
        move |ev: leptos::ev::Event| {
            let input: HtmlInputElement = event_target(&ev);
            on_file_selected(first_file(input.files()));
        }
    };

    let on_drop = {
        let on_file_selected = on_file_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);
            let files = ev.data_transfer().and_then(|dt| dt.files());
            if let Some(file) = first_file(files) {
                on_file_selected(Some(file));
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || is_dragover.get()
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <input type="file" accept="image/*" on:change=on_change />
            <p class="text-muted">
                {move || match selected_name.get() {
                    Some(name) => format!("Selected: {}", name),
                    None => "Choose an image or drop it here".to_string(),
                }}
            </p>
        </div>
    }
}

fn first_file(files: Option<FileList>) -> Option<File> {
    files.and_then(|list| list.get(0))
}
