//! バックエンドとやり取りする型
//!
//! - DetectionRecord: 履歴の1件
//! - HistoryPage: `GET /history/` のレスポンス
//! - UploadResult: `POST /upload` のレスポンス

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 検出履歴レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub id: i64,
    /// バックエンドの値そのまま（タイムゾーン無し）
    #[serde(with = "crate::timestamp")]
    pub timestamp: NaiveDateTime,
    pub num_people: u32,
    /// 注釈付き画像の相対パス（例: "outputs/vis_cam1.jpg"）
    pub image_path: String,
}

/// 履歴1ページ分
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryPage {
    #[serde(default)]
    pub records: Vec<DetectionRecord>,
    #[serde(default)]
    pub total: u64,
}

/// アップロード結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub num_people: u32,
    pub image_path: String,
}
