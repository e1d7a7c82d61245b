pub mod excel;

use crate::error::Result;
use appliance_compare_common::ResultTable;
use std::path::{Path, PathBuf};

/// 出力先がディレクトリ（または拡張子なし）なら `{title}.{extension}` を付ける
pub fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.to_path_buf()
    }
}

/// エクスポート時のデフォルトタイトル
pub fn default_title() -> String {
    format!("家電性能比較_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
}

/// 比較表をJSONで保存
pub fn export_json(table: &ResultTable, output: &Path, title: &str) -> Result<PathBuf> {
    let output_path = output_path_for_format(output, title, "json");
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(table)?;
    std::fs::write(&output_path, json)?;
    Ok(output_path)
}

/// 比較表とグラフをExcelで保存
pub fn export_excel(table: &ResultTable, output: &Path, title: &str) -> Result<PathBuf> {
    let output_path = output_path_for_format(output, title, "xlsx");
    excel::generate_excel(table, &output_path, title)?;
    Ok(output_path)
}
