//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("家電の種類を一つ以上選択してください。")]
    EmptySelection,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
