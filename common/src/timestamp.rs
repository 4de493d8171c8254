//! 日時の解析
//!
//! バックエンドの日時カラムはタイムゾーン無し（`utcnow()` の値）で、期間検索の
//! `start_time`/`end_time` もその値と直接比較される。表示と検索条件の基準を
//! 揃えるため、日時はずらさずに壁時計の値（NaiveDateTime）のまま扱う。

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{Error, Result};

/// ナイーブ日時として受け付ける書式（`datetime-local` の値を含む）
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// シリアライズ時の書式（バックエンドと同じ形）
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// レコードの日時文字列を壁時計の値として解析
///
/// オフセット付きの値は、そのオフセットでの日時をそのまま使う。
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    if let Some(naive) = parse_naive(value) {
        return Ok(naive);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_local())
        .map_err(|_| Error::InvalidTime(value.to_string()))
}

/// 検索条件の開始/終了日時を検証
///
/// 空文字は「未指定」として許可し、値はそのまま返す（送信時に加工しない）。
pub fn validate_time_bound(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || parse_naive(trimmed).is_some() {
        Ok(trimmed.to_string())
    } else {
        Err(Error::InvalidTime(value.to_string()))
    }
}

/// `#[serde(with = "crate::timestamp")]` 用
pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.format(WIRE_FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}
