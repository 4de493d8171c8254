//! バックエンドAPI

pub mod backend;

pub use backend::{fetch_history, log_request_error, upload_image};
