//! 検出結果コンポーネント

use leptos::prelude::*;
use person_detect_common::UploadResult;

#[component]
pub fn DetectionResult(result: UploadResult, image_url: String) -> impl IntoView {
    view! {
        <div class="detection-result">
            <h2>"Detection Result"</h2>
            <p>{format!("Number of persons: {}", result.num_people)}</p>
            <img
                src=image_url
                alt="Detection Result"
                style="max-width: 100%; height: auto;"
            />
        </div>
    }
}
