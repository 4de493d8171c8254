use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersonDetectError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("ページが範囲外です: {page}（全{pages}ページ）")]
    PageOutOfRange { page: u32, pages: u32 },

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] person_detect_common::Error),
}

pub type Result<T> = std::result::Result<T, PersonDetectError>;
