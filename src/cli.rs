use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "person-detect")]
#[command(about = "人物検出サービスのフロントエンド（アップロード・履歴閲覧）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドURL（設定ファイルより優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像をアップロードして人数を検出
    Upload {
        /// 画像ファイル
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 検出履歴を1ページ表示
    History {
        /// 画像名で検索
        #[arg(short, long, default_value = "")]
        search: String,

        /// 開始日時 (例: 2024-03-01T08:00)
        #[arg(long, default_value = "", value_parser = parse_time_bound)]
        start: String,

        /// 終了日時
        #[arg(long, default_value = "", value_parser = parse_time_bound)]
        end: String,

        /// ページ番号（1始まり）
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// 対話式で履歴を検索・ページ送り
    Browse,

    /// 設定を表示/編集
    Config {
        /// バックエンドURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

fn parse_time_bound(value: &str) -> Result<String, String> {
    person_detect_common::validate_time_bound(value).map_err(|e| e.to_string())
}
