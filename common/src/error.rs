//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// バックエンド呼び出しの失敗（「request failed」として一律に扱う）
    pub fn is_request_failure(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Status(_) | Error::Json(_))
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_http() {
        let error = Error::Http("connection refused".to_string());
        let display = format!("{}", error);
        assert!(display.contains("HTTP error"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_error_display_status() {
        let error = Error::Status(400);
        assert_eq!(format!("{}", error), "Unexpected status: 400");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_request_failure_family() {
        assert!(Error::Http("timeout".into()).is_request_failure());
        assert!(Error::Status(500).is_request_failure());
        let json_error = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        assert!(Error::Json(json_error).is_request_failure());
        assert!(!Error::InvalidTime("yesterday".into()).is_request_failure());
        assert!(!Error::Config("missing".into()).is_request_failure());
    }
}
