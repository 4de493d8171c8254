//! 検出履歴画面の状態
//!
//! 入力中の条件（draft）と確定済みの条件（committed）を別々に持つ。
//! draft の編集ではリクエストを発行しない。確定・リセット・ページ移動の
//! 各操作がそれぞれちょうど1つの `FetchRequest` を返し、呼び出し側は
//! それを1か所で送信する。

use crate::pagination::Pagination;
use crate::query::{QueryField, QueryState};
use crate::sequence::{Applied, FetchToken, RequestSequencer};
use crate::types::{DetectionRecord, HistoryPage};

/// 送信すべき履歴取得リクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub token: FetchToken,
    pub query: QueryState,
}

impl FetchRequest {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        self.query.to_params()
    }
}

#[derive(Debug, Clone, Default)]
pub struct HistoryState {
    draft: QueryState,
    committed: QueryState,
    records: Vec<DetectionRecord>,
    total: u64,
    sequencer: RequestSequencer,
}

impl HistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &QueryState {
        &self.draft
    }

    pub fn committed(&self) -> &QueryState {
        &self.committed
    }

    pub fn records(&self) -> &[DetectionRecord] {
        &self.records
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.committed.page, self.total)
    }

    /// 入力欄の変更を draft に反映（リクエストなし）
    pub fn update_draft(&mut self, field: QueryField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    /// 画面表示時の取得
    pub fn initial_fetch(&mut self) -> FetchRequest {
        self.fetch_committed()
    }

    /// 検索確定: draft を committed にコピーして1ページ目を取得
    pub fn commit_search(&mut self) -> FetchRequest {
        self.committed = QueryState {
            page: 1,
            ..self.draft.clone()
        };
        self.fetch_committed()
    }

    /// 条件をすべてクリアして1ページ目を取得
    pub fn reset_search(&mut self) -> FetchRequest {
        self.draft = QueryState::default();
        self.committed = QueryState::default();
        self.fetch_committed()
    }

    /// ページ移動。範囲外または現在ページなら何もしない
    pub fn go_to_page(&mut self, page: u32) -> Option<FetchRequest> {
        if page == self.committed.page || !self.pagination().can_go_to(page) {
            return None;
        }
        self.committed.page = page;
        Some(self.fetch_committed())
    }

    pub fn next_page(&mut self) -> Option<FetchRequest> {
        if !self.pagination().has_next() {
            return None;
        }
        self.go_to_page(self.committed.page + 1)
    }

    pub fn previous_page(&mut self) -> Option<FetchRequest> {
        if !self.pagination().has_previous() {
            return None;
        }
        self.go_to_page(self.committed.page - 1)
    }

    /// レスポンスを反映
    ///
    /// 成功時はレコードと総件数を置き換える。失敗時は前回の表示を残す。
    /// 古いトークンのレスポンスは成否に関わらず破棄する。
    pub fn apply_response<E>(
        &mut self,
        token: FetchToken,
        result: Result<HistoryPage, E>,
    ) -> Applied<E> {
        if !self.sequencer.is_current(token) {
            return Applied::Stale;
        }
        match result {
            Ok(page) => {
                self.records = page.records;
                self.total = page.total;
                Applied::Updated
            }
            Err(e) => Applied::Failed(e),
        }
    }

    fn fetch_committed(&mut self) -> FetchRequest {
        FetchRequest {
            token: self.sequencer.issue(),
            query: self.committed.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::parse_timestamp;

    fn record(id: i64) -> DetectionRecord {
        DetectionRecord {
            id,
            timestamp: parse_timestamp("2024-03-05T14:07:09").unwrap(),
            num_people: 1,
            image_path: format!("outputs/vis_{}.jpg", id),
        }
    }

    fn page_of(ids: std::ops::Range<i64>, total: u64) -> HistoryPage {
        HistoryPage {
            records: ids.map(record).collect(),
            total,
        }
    }

    /// 初回取得済み（1ページ目に10件）の状態
    fn loaded(total: u64) -> HistoryState {
        let mut state = HistoryState::new();
        let req = state.initial_fetch();
        assert!(state.apply_response::<()>(req.token, Ok(page_of(1..11, total))).is_updated());
        state
    }

    fn param(req: &FetchRequest, key: &str) -> Option<String> {
        req.params().into_iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    #[test]
    fn test_initial_fetch_is_first_page_unfiltered() {
        let mut state = HistoryState::new();
        let req = state.initial_fetch();
        assert_eq!(req.query, QueryState::default());
        assert_eq!(param(&req, "skip").as_deref(), Some("0"));
        assert_eq!(param(&req, "limit").as_deref(), Some("10"));
    }

    #[test]
    fn test_draft_edit_does_not_touch_committed() {
        let mut state = loaded(25);
        state.update_draft(QueryField::SearchText, "cam1");
        state.update_draft(QueryField::StartTime, "2024-03-01T00:00");
        assert_eq!(state.draft().search_text, "cam1");
        assert_eq!(state.committed(), &QueryState::default());
        assert_eq!(state.records().len(), 10);
    }

    #[test]
    fn test_commit_search_resets_page() {
        let mut state = loaded(25);
        state.go_to_page(3).unwrap();
        state.update_draft(QueryField::SearchText, "cam1");

        let req = state.commit_search();
        assert_eq!(req.query.page, 1);
        assert_eq!(state.committed().page, 1);
        assert_eq!(param(&req, "skip").as_deref(), Some("0"));
        assert_eq!(param(&req, "search").as_deref(), Some("cam1"));
        assert_eq!(param(&req, "start_time"), None);
        assert_eq!(param(&req, "end_time"), None);
    }

    #[test]
    fn test_reset_clears_draft_and_committed() {
        let mut state = loaded(25);
        state.update_draft(QueryField::SearchText, "cam1");
        state.update_draft(QueryField::EndTime, "2024-03-31T23:59");
        state.commit_search();
        state.update_draft(QueryField::StartTime, "2024-01-01T00:00");

        let req = state.reset_search();
        assert_eq!(state.draft(), &QueryState::default());
        assert_eq!(state.committed(), &QueryState::default());
        assert_eq!(req.params().len(), 2);
    }

    #[test]
    fn test_go_to_page_bounds() {
        let mut state = loaded(25);
        assert!(state.go_to_page(0).is_none());
        assert!(state.go_to_page(4).is_none());
        assert_eq!(state.committed().page, 1);

        let req = state.go_to_page(3).unwrap();
        assert_eq!(param(&req, "skip").as_deref(), Some("20"));
        assert_eq!(state.committed().page, 3);
    }

    #[test]
    fn test_go_to_current_page_is_noop() {
        let mut state = loaded(25);
        assert!(state.go_to_page(1).is_none());

        state.go_to_page(2).unwrap();
        assert!(state.go_to_page(2).is_none());
        assert_eq!(state.committed().page, 2);
    }

    #[test]
    fn test_go_to_page_keeps_filters() {
        let mut state = loaded(25);
        state.update_draft(QueryField::SearchText, "cam1");
        let req = state.commit_search();
        state.apply_response::<()>(req.token, Ok(page_of(1..11, 25)));

        // 確定後の draft 編集はページ移動に影響しない
        state.update_draft(QueryField::SearchText, "cam2");
        let req = state.next_page().unwrap();
        assert_eq!(param(&req, "search").as_deref(), Some("cam1"));
        assert_eq!(param(&req, "skip").as_deref(), Some("10"));
    }

    #[test]
    fn test_next_and_previous_disabled_at_edges() {
        let mut state = loaded(25);
        assert!(state.previous_page().is_none());
        assert!(state.next_page().is_some());
        assert!(state.next_page().is_some());
        assert_eq!(state.committed().page, 3);
        assert!(!state.pagination().has_next());
        assert!(state.next_page().is_none());
        assert!(state.previous_page().is_some());
        assert_eq!(state.committed().page, 2);
    }

    #[test]
    fn test_failure_keeps_previous_records() {
        let mut state = loaded(25);
        let req = state.next_page().unwrap();
        let applied = state.apply_response(req.token, Err("connection refused"));
        assert_eq!(applied, Applied::Failed("connection refused"));
        assert_eq!(state.records().len(), 10);
        assert_eq!(state.records()[0].id, 1);
        assert_eq!(state.total(), 25);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = loaded(25);
        state.update_draft(QueryField::SearchText, "cam1");
        let first = state.commit_search();
        state.update_draft(QueryField::SearchText, "cam2");
        let second = state.commit_search();

        // 新しい方が先に届く
        assert!(state.apply_response::<()>(second.token, Ok(page_of(100..103, 3))).is_updated());
        assert_eq!(state.apply_response::<()>(first.token, Ok(page_of(1..11, 25))), Applied::Stale);
        assert_eq!(state.total(), 3);
        assert_eq!(state.records()[0].id, 100);
    }

    #[test]
    fn test_each_commit_issues_one_distinct_request() {
        let mut state = HistoryState::new();
        let a = state.initial_fetch();
        let b = state.commit_search();
        let c = state.reset_search();
        assert!(a.token < b.token && b.token < c.token);
    }
}
