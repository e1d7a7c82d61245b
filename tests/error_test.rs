//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use appliance_compare::error::AppError;

/// AppErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        AppError::Config("テスト設定エラー".to_string()),
        AppError::ApiCall("status 500".to_string()),
        AppError::ApiParse("候補がありません".to_string()),
        AppError::ExcelGeneration("Excel生成エラー".to_string()),
        AppError::MissingApiKey,
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingApiKeyエラーのメッセージ確認
#[test]
fn test_missing_api_key_message() {
    let display = format!("{}", AppError::MissingApiKey);

    assert!(display.contains("APIキー"));
    assert!(display.contains("GEMINI_API_KEY"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: AppError = io_err.into();

    assert!(matches!(err, AppError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: AppError = json_err.into();

    assert!(matches!(err, AppError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_is_transparent() {
    let err: AppError = appliance_compare_common::Error::EmptySelection.into();

    assert!(matches!(err, AppError::Common(_)));
    assert_eq!(format!("{}", err), "家電の種類を一つ以上選択してください。");
}

/// 抽出失敗のメッセージはラベル名を含む
#[test]
fn test_parse_error_passthrough() {
    let common_err = appliance_compare_common::extract_metrics("年間電気代: 100").unwrap_err();
    let err: AppError = common_err.into();

    assert!(format!("{}", err).contains("消費電力"));
}
