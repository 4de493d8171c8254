//! アップロード画面

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;
use person_detect_common::{Applied, BackendConfig, UploadState};
use crate::api::{log_request_error, upload_image};
use crate::components::{
    detection_result::DetectionResult,
    header::Header,
    upload_area::UploadArea,
};

#[component]
pub fn UploadScreen(config: BackendConfig) -> impl IntoView {
    // web_sys::File は Send ではないためローカルシグナルに置く
    let state = RwSignal::new_local(UploadState::<File>::new());
    let config = StoredValue::new(config);

    let result = Memo::new(move |_| state.with(|s| s.result().cloned()));
    let selected_name = Memo::new(move |_| state.with(|s| s.selected().map(|f| f.name())));

    let on_file_selected = move |file: Option<File>| {
        state.update(|s| s.select_file(file));
    };

    let on_upload = move |_| {
        // 未選択なら何もしない
        let Some(request) = state.try_update(|s| s.submit_upload()).flatten() else {
            return;
        };
        let config = config.get_value();
        spawn_local(async move {
            let response = upload_image(&config, &request.file).await;
            state.update(|s| {
                if let Applied::Failed(err) = s.apply_response(request.token, response) {
                    log_request_error("upload failed", &err);
                }
            });
        });
    };

    view! {
        <div class="container">
            <Header
                title="Upload Image for Person Detection"
                link_href="/history"
                link_label="Go to History"
            />

            <UploadArea selected_name=selected_name on_file_selected=on_file_selected />

            <button class="btn btn-primary" on:click=on_upload>"Upload"</button>

            {move || result.get().map(|r| {
                let image_url = config.with_value(|c| c.image_url(&r.image_path));
                view! { <DetectionResult result=r image_url=image_url /> }
            })}
        </div>
    }
}
