//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use tag_upload::error::TagUploadError;

/// TagUploadErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        TagUploadError::Config("テスト設定エラー".to_string()),
        TagUploadError::FileNotFound("input.xlsx".to_string()),
        TagUploadError::TagCountMismatch { files: 2, tags: 1 },
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// ファイル数とタグ数の不一致メッセージ
#[test]
fn test_tag_count_mismatch_message() {
    let err = TagUploadError::TagCountMismatch { files: 3, tags: 2 };
    let display = format!("{}", err);

    assert!(display.contains('3'));
    assert!(display.contains('2'));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: TagUploadError = io_err.into();

    assert!(matches!(err, TagUploadError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: TagUploadError = json_err.into();

    assert!(matches!(err, TagUploadError::JsonParse(_)));
}

/// common::Errorは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let common_err = tag_upload_common::Error::RequestFailed {
        status: 502,
        body: "bad gateway".to_string(),
    };
    let err: TagUploadError = common_err.into();

    assert!(matches!(err, TagUploadError::Common(_)));
    assert_eq!(format!("{}", err), "Server error: 502 - bad gateway");
    assert_eq!(
        err.alert_message(),
        "An error occurred: Server error: 502 - bad gateway"
    );
}

/// CLI側のエラーもWeb版と同じ形式で通知
#[test]
fn test_alert_message_for_cli_errors() {
    let err = TagUploadError::FileNotFound("missing.pdf".to_string());
    let alert = err.alert_message();

    assert!(alert.starts_with("An error occurred: "));
    assert!(alert.contains("missing.pdf"));
}

/// アラート文言の接頭辞は1回だけ
#[test]
fn test_alert_message_has_single_prefix() {
    let err: TagUploadError = tag_upload_common::Error::RequestFailed {
        status: 500,
        body: "boom".to_string(),
    }
    .into();
    let alert = err.alert_message();

    assert_eq!(alert.matches("An error occurred").count(), 1);
    assert!(!alert.starts_with("Error:"));
}
