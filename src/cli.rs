use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tag_upload_common::Tag;

#[derive(Parser)]
#[command(name = "tag-upload")]
#[command(about = "タグ付きファイルを一括アップロードし、処理結果を保存するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ファイルをタグ付きで送信し、結果を保存
    ///
    /// --file と --tag は指定順に1組ずつ対応する
    Upload {
        /// 送信するファイル（.xlsx / .xls / .pdf）
        #[arg(short = 'f', long = "file", required = true)]
        files: Vec<PathBuf>,

        /// ファイルに付けるタグ (TypeA/TypeB/TypeC/TypeD)
        #[arg(short = 't', long = "tag", required = true)]
        tags: Vec<Tag>,

        /// 送信先サーバー（省略時は設定値）
        #[arg(short, long)]
        server: Option<String>,

        /// 保存先ディレクトリ（省略時は設定値、なければカレント）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 送信先サーバーURLを設定
        #[arg(long)]
        set_server: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },

    /// 使用できるタグを一覧表示
    Tags,
}

impl Commands {
    /// 設定ファイルを読む必要があるか
    pub fn needs_config(&self) -> bool {
        !matches!(self, Commands::Tags)
    }
}
