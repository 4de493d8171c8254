//! バックエンドのURL組み立て

use crate::error::{Error, Result};

/// 既定のバックエンドURL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const UPLOAD_PATH: &str = "upload";
const HISTORY_PATH: &str = "history/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl BackendConfig {
    /// http/https のURLのみ受け付ける
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::Config(format!("invalid backend URL: {}", base_url)));
        }
        Ok(Self {
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /upload`
    pub fn upload_url(&self) -> String {
        self.join(UPLOAD_PATH)
    }

    /// `GET /history/`
    pub fn history_url(&self) -> String {
        self.join(HISTORY_PATH)
    }

    /// 注釈付き画像の取得URL
    pub fn image_url(&self, image_path: &str) -> String {
        self.join(image_path)
    }

    fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
