//! 対話式の履歴閲覧
//!
//! 入力中の条件（draft）はコマンドで編集し、`/` で確定するまで
//! リクエストは送らない。

use crate::client::DetectionClient;
use crate::error::{PersonDetectError, Result};
use crate::render::{format_query, print_history};
use dialoguer::Input;
use log::error;
use person_detect_common::{
    validate_time_bound, Applied, FetchRequest, HistoryState, QueryField,
};

/// 対話アクション
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseAction {
    /// draft の項目を編集
    Edit(QueryField, String),
    /// draft を確定して検索
    Search,
    /// 条件をクリア
    Reset,
    /// 次のページ
    Next,
    /// 前のページ
    Previous,
    /// 指定ページへ
    GoTo(u32),
    /// 終了
    Quit,
    /// 解釈できない入力
    Unknown(String),
}

pub const HELP: &str =
    "操作: [s 文字列]検索語 [f 日時]開始 [t 日時]終了 [/]検索 [x]リセット [n]次 [p]前 [g N]ページ指定 [q]終了";

/// 入力行をアクションに変換
pub fn parse_browse_command(input: &str) -> BrowseAction {
    let trimmed = input.trim();
    let (command, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((c, a)) => (c, a.trim()),
        None => (trimmed, ""),
    };

    match command {
        "s" => BrowseAction::Edit(QueryField::SearchText, arg.to_string()),
        "f" => BrowseAction::Edit(QueryField::StartTime, arg.to_string()),
        "t" => BrowseAction::Edit(QueryField::EndTime, arg.to_string()),
        "/" | "" => BrowseAction::Search,
        "x" => BrowseAction::Reset,
        "n" => BrowseAction::Next,
        "p" => BrowseAction::Previous,
        "g" => match arg.parse() {
            Ok(page) => BrowseAction::GoTo(page),
            Err(_) => BrowseAction::Unknown(trimmed.to_string()),
        },
        "q" | "Q" => BrowseAction::Quit,
        _ => BrowseAction::Unknown(trimmed.to_string()),
    }
}

/// アクションを状態に適用し、送るべきリクエストを返す
///
/// draft の編集は常に `Ok(None)`。日時の書式が不正なら draft も変更しない。
pub fn apply_action(state: &mut HistoryState, action: &BrowseAction) -> Result<Option<FetchRequest>> {
    let request = match action {
        BrowseAction::Edit(field @ (QueryField::StartTime | QueryField::EndTime), value) => {
            let value = validate_time_bound(value)?;
            state.update_draft(*field, value);
            None
        }
        BrowseAction::Edit(field, value) => {
            state.update_draft(*field, value.clone());
            None
        }
        BrowseAction::Search => Some(state.commit_search()),
        BrowseAction::Reset => Some(state.reset_search()),
        BrowseAction::Next => state.next_page(),
        BrowseAction::Previous => state.previous_page(),
        BrowseAction::GoTo(page) => state.go_to_page(*page),
        BrowseAction::Quit | BrowseAction::Unknown(_) => None,
    };
    Ok(request)
}

async fn dispatch(client: &DetectionClient, state: &mut HistoryState, request: FetchRequest) {
    let response = client.fetch_history(&request.query).await;
    if let Applied::Failed(e) = state.apply_response(request.token, response) {
        error!("history fetch failed: {}", e);
    }
}

fn show(state: &HistoryState, client: &DetectionClient) {
    println!();
    println!("確定済み: {}", format_query(state.committed()));
    print_history(state.records(), &state.pagination(), client.backend());
    if state.draft() != state.committed() && state.draft().has_filters() {
        println!("入力中:   {}", format_query(state.draft()));
    }
}

/// 対話ループ
pub async fn run_browse(client: &DetectionClient) -> Result<()> {
    let mut state = HistoryState::new();
    let request = state.initial_fetch();
    dispatch(client, &mut state, request).await;

    println!("{}", HELP);

    loop {
        show(&state, client);

        let input: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PersonDetectError::Prompt(e.to_string()))?;

        let action = parse_browse_command(&input);
        match &action {
            BrowseAction::Quit => break,
            BrowseAction::Unknown(raw) => {
                println!("不明なコマンド: {}\n{}", raw, HELP);
                continue;
            }
            _ => {}
        }

        match apply_action(&mut state, &action) {
            Ok(Some(request)) => dispatch(client, &mut state, request).await,
            Ok(None) => {}
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use person_detect_common::{HistoryPage, QueryState};

    fn loaded(total: u64) -> HistoryState {
        let mut state = HistoryState::new();
        let req = state.initial_fetch();
        state.apply_response::<()>(req.token, Ok(HistoryPage { records: vec![], total }));
        state
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_browse_command("s cam1"),
            BrowseAction::Edit(QueryField::SearchText, "cam1".into())
        );
        assert_eq!(
            parse_browse_command("f 2024-03-01T08:00"),
            BrowseAction::Edit(QueryField::StartTime, "2024-03-01T08:00".into())
        );
        assert_eq!(parse_browse_command("s"), BrowseAction::Edit(QueryField::SearchText, "".into()));
        assert_eq!(parse_browse_command(""), BrowseAction::Search);
        assert_eq!(parse_browse_command("/"), BrowseAction::Search);
        assert_eq!(parse_browse_command("x"), BrowseAction::Reset);
        assert_eq!(parse_browse_command(" n "), BrowseAction::Next);
        assert_eq!(parse_browse_command("p"), BrowseAction::Previous);
        assert_eq!(parse_browse_command("g 3"), BrowseAction::GoTo(3));
        assert_eq!(parse_browse_command("q"), BrowseAction::Quit);
        assert_eq!(parse_browse_command("g x"), BrowseAction::Unknown("g x".into()));
        assert_eq!(parse_browse_command("zz"), BrowseAction::Unknown("zz".into()));
    }

    #[test]
    fn test_edits_never_request() {
        let mut state = loaded(25);
        for input in ["s cam1", "f 2024-03-01T08:00", "t 2024-03-02T08:00"] {
            let action = parse_browse_command(input);
            assert!(apply_action(&mut state, &action).unwrap().is_none());
        }
        assert_eq!(state.committed(), &QueryState::default());
        assert_eq!(state.draft().search_text, "cam1");
    }

    #[test]
    fn test_invalid_time_leaves_draft() {
        let mut state = loaded(25);
        let action = parse_browse_command("f tomorrow");
        assert!(apply_action(&mut state, &action).is_err());
        assert_eq!(state.draft().start_time, "");
    }

    #[test]
    fn test_search_requests_first_page() {
        let mut state = loaded(25);
        apply_action(&mut state, &BrowseAction::GoTo(3)).unwrap();
        apply_action(&mut state, &parse_browse_command("s cam1")).unwrap();
        let request = apply_action(&mut state, &BrowseAction::Search).unwrap().unwrap();
        assert_eq!(request.query.page, 1);
        assert_eq!(request.query.search_text, "cam1");
    }

    #[test]
    fn test_paging_respects_bounds() {
        let mut state = loaded(25);
        assert!(apply_action(&mut state, &BrowseAction::Previous).unwrap().is_none());
        assert!(apply_action(&mut state, &BrowseAction::GoTo(4)).unwrap().is_none());
        assert!(apply_action(&mut state, &parse_browse_command("g 1")).unwrap().is_none());
        let request = apply_action(&mut state, &BrowseAction::Next).unwrap().unwrap();
        assert_eq!(request.query.page, 2);
    }
}
