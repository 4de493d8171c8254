//! ページ送りの可否判定

use crate::query::PAGE_SIZE;

/// 現在ページと総件数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub total: u64,
}

impl Pagination {
    pub fn new(page: u32, total: u64) -> Self {
        Self { page, total }
    }

    /// 「前へ」が押せるか（1ページ目では不可）
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// 「次へ」が押せるか（`page * PAGE_SIZE >= total` なら不可）
    pub fn has_next(&self) -> bool {
        u64::from(self.page) * u64::from(PAGE_SIZE) < self.total
    }

    /// ページ `n` に移動できるか
    ///
    /// 1ページ目は結果が0件でも常に有効。
    pub fn can_go_to(&self, n: u32) -> bool {
        n == 1 || (n > 1 && u64::from(n - 1) * u64::from(PAGE_SIZE) < self.total)
    }

    /// 総ページ数（0件でも1）
    pub fn page_count(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(PAGE_SIZE)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}
