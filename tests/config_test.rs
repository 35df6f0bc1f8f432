//! 設定ファイルテスト

use paper_summary::config::Config;
use paper_summary::error::PaperSummaryError;
use paper_summary_common::ResponseSchema;
use tempfile::tempdir;

/// 設定ファイルがなければ既定値
#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config.client.endpoint, "http://localhost:8000/analyze");
    assert_eq!(config.client.schema, ResponseSchema::Canonical);
    assert_eq!(config.timeout_seconds, 120);
}

/// 保存した設定を読み直せる
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.client.endpoint = "https://papers.example.org/analyze".into();
    config.timeout_seconds = 30;
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.client.endpoint, "https://papers.example.org/analyze");
    assert_eq!(loaded.timeout_seconds, 30);
}

/// 設定ファイルはフラットなJSON
#[test]
fn test_config_file_is_flat() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"endpoint": "http://127.0.0.1:9000/upload", "schema": "legacy"}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.client.endpoint, "http://127.0.0.1:9000/upload");
    assert_eq!(config.client.schema, ResponseSchema::Legacy);
    assert_eq!(config.client.field_name, "file");
    assert_eq!(config.timeout_seconds, 120);
}

/// エンドポイント省略時はスキーマの既定エンドポイント
#[test]
fn test_schema_only_file_uses_schema_endpoint() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"schema": "legacy", "timeout_seconds": 15}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.client.schema, ResponseSchema::Legacy);
    assert_eq!(config.client.endpoint, "http://localhost:8000/upload");
    assert_eq!(config.timeout_seconds, 15);
}

/// 壊れた設定ファイル
#[test]
fn test_load_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(Config::load_from(&path), Err(PaperSummaryError::JsonParse(_))));
}

/// 壊れた設定ファイルでも既定値から設定し直せる
#[test]
fn test_load_or_default_recovers_from_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut config = Config::load_or_default(&path);
    assert_eq!(config.client.endpoint, "http://localhost:8000/analyze");

    config.client.endpoint = "http://127.0.0.1:9000/analyze".into();
    config.save_to(&path).expect("設定保存失敗");
    assert_eq!(
        Config::load_from(&path).unwrap().client.endpoint,
        "http://127.0.0.1:9000/analyze"
    );
}

/// スキーマ上書きで既定エンドポイントが追従する
#[test]
fn test_schema_override_follows_default_endpoint() {
    let mut config = Config::default();
    config.apply_overrides(None, Some("legacy".into())).unwrap();

    assert_eq!(config.client.schema, ResponseSchema::Legacy);
    assert_eq!(config.client.endpoint, "http://localhost:8000/upload");
}

/// エンドポイント指定はスキーマ既定値より優先
#[test]
fn test_endpoint_override_wins() {
    let mut config = Config::default();
    config
        .apply_overrides(Some(" http://10.0.0.5:8000/upload ".into()), Some("legacy".into()))
        .unwrap();

    assert_eq!(config.client.endpoint, "http://10.0.0.5:8000/upload");
}

/// 空の上書きは無視
#[test]
fn test_empty_overrides_ignored() {
    let mut config = Config::default();
    config.apply_overrides(Some("".into()), Some("  ".into())).unwrap();
    assert_eq!(config.client.endpoint, "http://localhost:8000/analyze");
}

/// 不正なスキーマ名
#[test]
fn test_invalid_schema_override() {
    let mut config = Config::default();
    let err = config.apply_overrides(None, Some("v2".into())).unwrap_err();
    assert!(matches!(err, PaperSummaryError::Config(_)));
}
