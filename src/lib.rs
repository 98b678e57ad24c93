//! tag-upload: タグ付きファイルを一括アップロードし、処理結果を保存するCLI

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
