//! Excel生成（CLI版）
//!
//! 共通ライブラリでバッファを生成してファイルに書き出す

use crate::error::{AppError, Result};
use appliance_compare_common::export::excel_core::generate_excel_buffer;
use appliance_compare_common::ResultTable;
use std::path::Path;

pub fn generate_excel(table: &ResultTable, output_path: &Path, title: &str) -> Result<()> {
    let buffer = generate_excel_buffer(table, title).map_err(AppError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(output_path, buffer)
        .map_err(|e| AppError::ExcelGeneration(format!("ファイル書き込みエラー: {}", e)))?;

    Ok(())
}
