//! 検出バックエンドのHTTPクライアント
//!
//! 失敗（通信エラー・非2xx・不正なJSON）は共通エラー型の
//! request failed 系で返す。非2xxは `Status`、それ以外は `Http`。

use std::path::Path;
use std::time::Duration;

use log::debug;
use person_detect_common::{BackendConfig, Error, HistoryPage, QueryState, UploadResult};
use reqwest::multipart::{Form, Part};

use crate::error::{PersonDetectError, Result};

pub struct DetectionClient {
    http: reqwest::Client,
    backend: BackendConfig,
}

impl DetectionClient {
    pub fn new(backend: BackendConfig, timeout_seconds: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| PersonDetectError::Config(e.to_string()))?;
        Ok(Self { http, backend })
    }

    pub fn backend(&self) -> &BackendConfig {
        &self.backend
    }

    /// 画像をmultipart（フィールド名 `file`）で送信
    pub async fn upload(&self, path: &Path) -> Result<UploadResult> {
        if !path.is_file() {
            return Err(PersonDetectError::FileNotFound(path.display().to_string()));
        }

        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
        let url = self.backend.upload_url();
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(request_failed)?;

        Ok(decode(response).await?)
    }

    /// 履歴を1ページ取得
    pub async fn fetch_history(&self, query: &QueryState) -> person_detect_common::Result<HistoryPage> {
        let url = self.backend.history_url();
        let params = query.to_params();
        debug!("GET {} {:?}", url, params);

        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(request_failed)?;

        decode(response).await
    }
}

fn request_failed(e: reqwest::Error) -> Error {
    Error::Http(e.to_string())
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> person_detect_common::Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status.as_u16()));
    }
    response.json::<T>().await.map_err(request_failed)
}
