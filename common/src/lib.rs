//! Person Detect Common Library
//!
//! CLIとWeb(WASM)で共有される型と画面状態

pub mod types;
pub mod timestamp;
pub mod query;
pub mod pagination;
pub mod sequence;
pub mod history;
pub mod upload;
pub mod endpoint;
pub mod error;

pub use types::{DetectionRecord, HistoryPage, UploadResult};
pub use timestamp::{parse_timestamp, validate_time_bound};
pub use query::{QueryField, QueryState, PAGE_SIZE};
pub use pagination::Pagination;
pub use sequence::{Applied, FetchToken, RequestSequencer};
pub use history::{FetchRequest, HistoryState};
pub use upload::{UploadRequest, UploadState};
pub use endpoint::{BackendConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};
