//! 画像アップロード画面の状態
//!
//! ファイルの型はフロントエンドごとに異なる（ブラウザは `web_sys::File`、
//! CLIはパス）ため、ジェネリックにしている。

use crate::sequence::{Applied, FetchToken, RequestSequencer};
use crate::types::UploadResult;

/// 送信すべきアップロードリクエスト
#[derive(Debug, Clone)]
pub struct UploadRequest<F> {
    pub token: FetchToken,
    pub file: F,
}

#[derive(Debug, Clone)]
pub struct UploadState<F> {
    selected: Option<F>,
    result: Option<UploadResult>,
    sequencer: RequestSequencer,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            selected: None,
            result: None,
            sequencer: RequestSequencer::default(),
        }
    }
}

impl<F: Clone> UploadState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイル選択（種類・サイズは検証しない）
    pub fn select_file(&mut self, file: Option<F>) {
        self.selected = file;
    }

    pub fn selected(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    pub fn result(&self) -> Option<&UploadResult> {
        self.result.as_ref()
    }

    /// 送信。ファイル未選択なら `None`（通信しない）
    pub fn submit_upload(&mut self) -> Option<UploadRequest<F>> {
        let file = self.selected.clone()?;
        Some(UploadRequest {
            token: self.sequencer.issue(),
            file,
        })
    }

    /// 成功時のみ結果を置き換える。失敗時は前回の結果を表示したまま
    pub fn apply_response<E>(
        &mut self,
        token: FetchToken,
        result: Result<UploadResult, E>,
    ) -> Applied<E> {
        if !self.sequencer.is_current(token) {
            return Applied::Stale;
        }
        match result {
            Ok(r) => {
                self.result = Some(r);
                Applied::Updated
            }
            Err(e) => Applied::Failed(e),
        }
    }
}
