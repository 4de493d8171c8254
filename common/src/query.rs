//! 検索条件（QueryState）とリクエストパラメータ

use serde::{Deserialize, Serialize};

/// 1ページあたりの件数（固定）
pub const PAGE_SIZE: u32 = 10;

/// 検索フォームで編集できる項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryField {
    SearchText,
    StartTime,
    EndTime,
}

/// 検索条件
///
/// 開始/終了日時は入力欄の文字列をそのまま保持し、空文字は未指定を表す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub search_text: String,
    pub start_time: String,
    pub end_time: String,
    pub page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            page: 1,
        }
    }
}

impl QueryState {
    pub fn field(&self, field: QueryField) -> &str {
        match field {
            QueryField::SearchText => &self.search_text,
            QueryField::StartTime => &self.start_time,
            QueryField::EndTime => &self.end_time,
        }
    }

    pub fn set_field(&mut self, field: QueryField, value: impl Into<String>) {
        let value = value.into();
        match field {
            QueryField::SearchText => self.search_text = value,
            QueryField::StartTime => self.start_time = value,
            QueryField::EndTime => self.end_time = value,
        }
    }

    pub fn has_filters(&self) -> bool {
        [&self.search_text, &self.start_time, &self.end_time]
            .iter()
            .any(|v| !v.trim().is_empty())
    }

    /// オフセット（`(page - 1) * PAGE_SIZE`）
    pub fn skip(&self) -> u64 {
        u64::from(self.page.max(1) - 1) * u64::from(PAGE_SIZE)
    }

    /// `GET /history/` のクエリパラメータ
    ///
    /// skip/limit は常に含める。search/start_time/end_time は
    /// トリム後に空でない場合のみ含め、値は入力のまま送る。
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("skip", self.skip().to_string()),
            ("limit", PAGE_SIZE.to_string()),
        ];

        let optional = [
            ("search", &self.search_text),
            ("start_time", &self.start_time),
            ("end_time", &self.end_time),
        ];
        for (key, value) in optional {
            if !value.trim().is_empty() {
                params.push((key, value.clone()));
            }
        }

        params
    }
}
