use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tag_upload::{cli, client, config, logging};
use tag_upload_common::Tag;
use cli::{Cli, Commands};
use client::UploadClient;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    // 設定を使うコマンドだけ読み込む
    let config = if cli.command.needs_config() {
        Config::load().context("設定の読み込みに失敗しました")?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Upload { files, tags, server, output } => {
            println!("📤 tag-upload - アップロード\n");

            let payload = client::build_payload(&files, &tags)?;
            let server = server.unwrap_or_else(|| config.server_url());
            let client = UploadClient::new(&server, Duration::from_secs(config.timeout_seconds))?;
            tracing::info!("{}件のファイルを送信: {}", payload.len(), client.upload_url());

            // 送信中のみ表示
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("Processing...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let result = client.upload(&payload).await;
            spinner.finish_and_clear();

            let artifact = match result {
                Ok(artifact) => artifact,
                Err(e) => {
                    tracing::error!("Error: {}", e);
                    eprintln!("{}", e.alert_message());
                    std::process::exit(1);
                }
            };

            let output_dir = output
                .or_else(|| config.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            let path = client::save_artifact(&artifact, &output_dir)?;
            println!("✔ 結果を保存: {} ({} bytes)", path.display(), artifact.data.len());

            println!("\n✅ 完了");
        }

        Commands::Config { set_server, show } => {
            let mut config = config;

            if let Some(url) = set_server {
                config.set_server_url(url)?;
                config.save()?;
                println!("✔ 送信先を設定しました");
            }

            if show {
                println!("設定:");
                println!("  送信先: {}", config.server_url());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  保存先: {}",
                    config
                        .output_dir
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "カレントディレクトリ".to_string())
                );
            }
        }

        Commands::Tags => {
            for tag in Tag::ALL {
                println!("{}\t{}", tag, tag.label());
            }
        }
    }

    Ok(())
}
