//! 端末表示用の整形

use chrono::NaiveDateTime;
use person_detect_common::{
    BackendConfig, DetectionRecord, Pagination, QueryField, QueryState, UploadResult,
};

use crate::error::{PersonDetectError, Result};

/// バックエンドの値をずらさずに表示（`--start/--end` と同じ基準）
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn format_upload_result(result: &UploadResult, backend: &BackendConfig) -> Vec<String> {
    vec![
        format!("Number of persons: {}", result.num_people),
        format!("Annotated image: {}", backend.image_url(&result.image_path)),
    ]
}

pub fn format_header() -> String {
    format!("{:>6}  {:<19}  {:>14}  {}", "ID", "Timestamp", "Detected Count", "Image")
}

pub fn format_record_row(record: &DetectionRecord, backend: &BackendConfig) -> String {
    format!(
        "{:>6}  {:<19}  {:>14}  {}",
        record.id,
        format_timestamp(&record.timestamp),
        record.num_people,
        backend.image_url(&record.image_path)
    )
}

/// 例: "Page 1/3 (25 records)  [Previous: disabled] [Next: enabled]"
pub fn format_pagination(pagination: &Pagination) -> String {
    let state = |enabled: bool| if enabled { "enabled" } else { "disabled" };
    format!(
        "Page {}/{} ({} records)  [Previous: {}] [Next: {}]",
        pagination.page,
        pagination.page_count(),
        pagination.total,
        state(pagination.has_previous()),
        state(pagination.has_next())
    )
}

/// 検索条件の要約（未指定は "-"）
pub fn format_query(query: &QueryState) -> String {
    let or_dash = |v: &str| {
        if v.trim().is_empty() {
            "-".to_string()
        } else {
            v.to_string()
        }
    };
    let fields = [
        ("search", QueryField::SearchText),
        ("start", QueryField::StartTime),
        ("end", QueryField::EndTime),
    ];
    fields
        .iter()
        .map(|(label, field)| format!("{}: {}", label, or_dash(query.field(*field))))
        .collect::<Vec<_>>()
        .join("  ")
}

/// 取得後の総件数で指定ページを検証
pub fn checked_pagination(page: u32, total: u64) -> Result<Pagination> {
    let pagination = Pagination::new(page, total);
    if pagination.can_go_to(page) {
        Ok(pagination)
    } else {
        Err(PersonDetectError::PageOutOfRange {
            page,
            pages: pagination.page_count(),
        })
    }
}

pub fn print_history(records: &[DetectionRecord], pagination: &Pagination, backend: &BackendConfig) {
    println!("{}", format_header());
    if records.is_empty() {
        println!("  (no records)");
    }
    for record in records {
        println!("{}", format_record_row(record, backend));
    }
    println!("{}", format_pagination(pagination));
}
