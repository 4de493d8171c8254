//! リクエストの順序付け
//!
//! 実行中のリクエストはキャンセルしない。代わりに発行ごとに単調増加の
//! トークンを振り、最新でないトークンのレスポンスは破棄する。

/// リクエスト識別トークン
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchToken(u64);

impl FetchToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// トークン発行器
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> FetchToken {
        self.latest += 1;
        FetchToken(self.latest)
    }

    pub fn is_current(&self, token: FetchToken) -> bool {
        token.0 == self.latest
    }
}

/// レスポンス適用の結果
#[derive(Debug, PartialEq)]
pub enum Applied<E> {
    /// 状態を更新した
    Updated,
    /// 新しいリクエストが発行済みのため破棄した
    Stale,
    /// 失敗。表示中のデータはそのまま
    Failed(E),
}

impl<E> Applied<E> {
    pub fn is_updated(&self) -> bool {
        matches!(self, Applied::Updated)
    }
}
