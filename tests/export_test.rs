//! Excel/JSON出力の統合テスト

use appliance_compare::export::{self, excel};
use appliance_compare_common::{Metrics, ResultRow, ResultTable};
use tempfile::tempdir;

fn create_test_table() -> ResultTable {
    let mut table = ResultTable::new();
    let rows = [
        ("エアコン", "霧ヶ峰 MSZ-ZW2224", 580, 27900),
        ("エアコン", "うるさらX AN224", 560, 26500),
        ("冷蔵庫", "NR-F509", 110, 8500),
    ];
    for (category, product, power, cost) in rows {
        table.push(ResultRow::new(
            category,
            product,
            Metrics {
                power_watts: power,
                annual_cost_yen: cost,
            },
        ));
    }
    table
}

#[test]
fn test_excel_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("compare.xlsx");

    let result = excel::generate_excel(&create_test_table(), &output_path, "家電性能比較");

    assert!(result.is_ok(), "Excel生成に失敗: {:?}", result.err());
    let metadata = std::fs::metadata(&output_path).expect("ファイルメタデータ取得失敗");
    assert!(metadata.len() > 0, "Excelファイルが空");
}

#[test]
fn test_export_excel_into_directory_uses_title() {
    let dir = tempdir().expect("Failed to create temp dir");

    let written = export::export_excel(&create_test_table(), dir.path(), "比較結果").unwrap();

    assert_eq!(written, dir.path().join("比較結果.xlsx"));
    assert!(written.exists());
}

#[test]
fn test_export_json_round_trips_rows() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("out").join("compare.json");
    let table = create_test_table();

    let written = export::export_json(&table, &output_path, "unused").unwrap();
    assert_eq!(written, output_path);

    let content = std::fs::read_to_string(&written).unwrap();
    let rows: Vec<ResultRow> = serde_json::from_str(&content).unwrap();
    assert_eq!(rows.as_slice(), table.rows());
}

#[test]
fn test_output_path_for_format() {
    let dir = tempdir().expect("Failed to create temp dir");

    let path = export::output_path_for_format(dir.path(), "t", "json");
    assert_eq!(path, dir.path().join("t.json"));

    let explicit = dir.path().join("explicit.xlsx");
    assert_eq!(export::output_path_for_format(&explicit, "t", "xlsx"), explicit);
}

#[test]
fn test_default_title_prefix() {
    assert!(export::default_title().starts_with("家電性能比較_"));
}
