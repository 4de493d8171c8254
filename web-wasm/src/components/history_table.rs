//! 検出履歴テーブルコンポーネント

use chrono::{Datelike, NaiveDateTime, Timelike};
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use person_detect_common::{BackendConfig, DetectionRecord};

#[component]
pub fn HistoryTable(
    records: Memo<Vec<DetectionRecord>>,
    config: BackendConfig,
) -> impl IntoView {
    view! {
        <table class="history-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Timestamp"</th>
                    <th>"Detected Count"</th>
                    <th>"Image"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || records.get()
                    key=|record| record.id
                    children=move |record| {
                        let image_url = config.image_url(&record.image_path);
                        view! {
                            <tr>
                                <td>{record.id}</td>
                                <td>{format_wall_clock(&record.timestamp)}</td>
                                <td>{record.num_people}</td>
                                <td>
                                    <img src=image_url alt="result" style="width: 100px;" />
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

/// 記録時刻をずらさずにブラウザのロケール書式で表示
///
/// 検索の期間指定と同じ壁時計の値として扱うため、ローカル時刻の
/// 各成分から Date を組み立てる（タイムゾーン変換をしない）。
fn format_wall_clock(timestamp: &NaiveDateTime) -> String {
    wall_clock_date(timestamp)
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}

fn wall_clock_date(timestamp: &NaiveDateTime) -> js_sys::Date {
    js_sys::Date::new_with_year_month_day_hr_min_sec(
        timestamp.year() as u32,
        timestamp.month0() as i32,
        timestamp.day() as i32,
        timestamp.hour() as i32,
        timestamp.minute() as i32,
        timestamp.second() as i32,
    )
}
