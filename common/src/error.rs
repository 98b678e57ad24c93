//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// サーバーが2xx以外を返した
    #[error("Server error: {status} - {body}")]
    RequestFailed { status: u16, body: String },

    /// 通信失敗・レスポンス不正など想定外の例外
    #[error("{0}")]
    Unexpected(String),
}

impl Error {
    /// ユーザー向けアラート文言
    ///
    /// 失敗の種類によらず同じ形式で表示する
    pub fn alert_message(&self) -> String {
        format!("An error occurred: {}", self)
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
