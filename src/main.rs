use clap::Parser;
use indicatif::ProgressBar;
use log::error;
use person_detect::{browse, cli, client, config, error, render};
use person_detect_common::{Applied, QueryState, UploadState};
use cli::{Cli, Commands};
use client::DetectionClient;
use config::Config;
use error::Result;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match cli.command {
        Commands::Upload { file } => {
            let config = Config::load()?;
            let client = DetectionClient::new(config.backend(cli.base_url.as_deref())?, config.timeout_seconds)?;
            let mut state = UploadState::new();
            state.select_file(Some(file));

            // ファイル未選択なら送信しない
            let Some(request) = state.submit_upload() else {
                return Ok(());
            };

            let spinner = ProgressBar::new_spinner();
            spinner.set_message(format!("アップロード中: {}", request.file.display()));
            spinner.enable_steady_tick(Duration::from_millis(100));
            let response = client.upload(&request.file).await;
            spinner.finish_and_clear();

            match state.apply_response(request.token, response) {
                Applied::Failed(e) => {
                    error!("upload failed: {}", e);
                    return Err(e);
                }
                Applied::Stale | Applied::Updated => {}
            }

            if let Some(result) = state.result() {
                println!("Detection Result");
                for line in render::format_upload_result(result, client.backend()) {
                    println!("  {}", line);
                }
            }
        }

        Commands::History { search, start, end, page } => {
            let config = Config::load()?;
            let client = DetectionClient::new(config.backend(cli.base_url.as_deref())?, config.timeout_seconds)?;
            let query = QueryState {
                search_text: search,
                start_time: start,
                end_time: end,
                page,
            };

            let history = client.fetch_history(&query).await.inspect_err(|e| {
                error!("history fetch failed: {}", e);
            })?;

            println!("{}", render::format_query(&query));
            let pagination = render::checked_pagination(page, history.total)?;
            render::print_history(&history.records, &pagination, client.backend());
        }

        Commands::Browse => {
            let config = Config::load()?;
            let client = DetectionClient::new(config.backend(cli.base_url.as_deref())?, config.timeout_seconds)?;
            browse::run_browse(&client).await?;
        }

        Commands::Config { set_base_url, show } => {
            let mut config = Config::load_or_default();

            if let Some(url) = set_base_url {
                config.set_base_url(&url)?;
                config.save()?;
                println!("✔ バックエンドURLを設定しました: {}", config.base_url);
            }

            if show {
                println!("設定:");
                println!("  バックエンドURL: {}", config.base_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
