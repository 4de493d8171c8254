//! 検出バックエンド連携
//!
//! - `POST /upload`: 画像をmultipartで送信し、検出人数と注釈画像パスを受け取る
//! - `GET /history/`: 検索条件に応じた履歴1ページ分を受け取る
//!
//! 失敗はすべて「request failed」として `JsValue` で返す。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response, UrlSearchParams};
use person_detect_common::{BackendConfig, HistoryPage, QueryState, UploadResult};

/// 画像をアップロードして検出結果を取得
pub async fn upload_image(config: &BackendConfig, file: &File) -> Result<UploadResult, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename("file", file, &file.name())?;

    // Content-Typeはブラウザがboundary付きで設定する
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(&config.upload_url(), &opts)?;
    let json = send(&request).await?;
    let result: UploadResult = serde_wasm_bindgen::from_value(json)?;
    Ok(result)
}

/// 確定済みの検索条件で履歴を1ページ取得
pub async fn fetch_history(config: &BackendConfig, query: &QueryState) -> Result<HistoryPage, JsValue> {
    let url = format!("{}?{}", config.history_url(), encode_params(&query.to_params())?);

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&url, &opts)?;
    let json = send(&request).await?;
    let page: HistoryPage = serde_wasm_bindgen::from_value(json)?;
    Ok(page)
}

/// 失敗をコンソールに出力（画面上のエラー表示はしない）
pub fn log_request_error(context: &str, error: &JsValue) {
    web_sys::console::error_2(&JsValue::from_str(context), error);
}

fn encode_params(params: &[(&'static str, String)]) -> Result<String, JsValue> {
    let search = UrlSearchParams::new()?;
    for (key, value) in params {
        search.append(key, value);
    }
    Ok(search.to_string().into())
}

/// リクエスト送信（共通処理）
async fn send(request: &Request) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    JsFuture::from(resp.json()?).await
}
