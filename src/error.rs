use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagUploadError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("ファイル数({files})とタグ数({tags})が一致しません")]
    TagCountMismatch { files: usize, tags: usize },

    #[error("HTTP通信エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] tag_upload_common::Error),
}

impl TagUploadError {
    /// ユーザー向けアラート文言（Web版と同じ形式）
    pub fn alert_message(&self) -> String {
        match self {
            TagUploadError::Common(e) => e.alert_message(),
            other => format!("An error occurred: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, TagUploadError>;
