//! 設定ファイルテスト

use std::path::PathBuf;
use tag_upload::config::{Config, DEFAULT_SERVER_URL};
use tag_upload::error::TagUploadError;
use tempfile::tempdir;

/// ファイルが無ければ既定値
#[test]
fn test_load_missing_file_returns_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");

    assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    assert_eq!(config.timeout_seconds, 300);
    assert!(config.output_dir.is_none());
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        server_url: "http://example.test:9000".to_string(),
        timeout_seconds: 30,
        output_dir: Some(PathBuf::from("/tmp/out")),
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded.server_url, "http://example.test:9000");
    assert_eq!(loaded.timeout_seconds, 30);
    assert_eq!(loaded.output_dir, Some(PathBuf::from("/tmp/out")));
}

/// 欠けた項目は既定値で補う
#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "timeout_seconds": 10 }"#).unwrap();

    let config = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    assert_eq!(config.timeout_seconds, 10);
}

/// 壊れたJSONはエラー
#[test]
fn test_invalid_json_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(TagUploadError::JsonParse(_))));
}

/// URLの形式チェックと末尾スラッシュ除去
#[test]
fn test_set_server_url() {
    let mut config = Config::default();

    assert!(matches!(
        config.set_server_url("localhost:8000".to_string()),
        Err(TagUploadError::Config(_))
    ));
    assert_eq!(config.server_url, DEFAULT_SERVER_URL);

    config
        .set_server_url("https://files.example.test/".to_string())
        .expect("設定失敗");
    assert_eq!(config.server_url, "https://files.example.test");
}
