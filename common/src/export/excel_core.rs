//! Excel生成（共通ライブラリ）
//!
//! 比較表シートと、年間電気代・消費電力の棒グラフシートを生成

use crate::report::{BarSeries, ResultTable, TABLE_HEADERS};
use rust_xlsxwriter::*;

/// 比較表シート名
pub const TABLE_SHEET: &str = "results";

/// グラフシート名
pub const CHART_SHEET: &str = "charts";

const TABLE_HEADER_ROW: u32 = 2;

/// Excelをバッファに生成
///
/// # Arguments
/// * `table` - 比較表
/// * `title` - 比較表シート先頭に書くタイトル
pub fn generate_excel_buffer(table: &ResultTable, title: &str) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let title_format = Format::new().set_bold().set_font_size(14.0);

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x333333))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let text_format = Format::new()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let number_format = Format::new()
        .set_num_format("#,##0")
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    // 比較表
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(TABLE_SHEET)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    worksheet
        .write_string_with_format(0, 0, title, &title_format)
        .map_err(|e| format!("タイトル書き込みエラー: {}", e))?;

    for (col, header) in TABLE_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(TABLE_HEADER_ROW, col as u16, *header, &header_format)
            .map_err(|e| format!("見出し書き込みエラー: {}", e))?;
    }

    for (i, row) in table.rows().iter().enumerate() {
        let r = TABLE_HEADER_ROW + 1 + i as u32;
        worksheet
            .write_string_with_format(r, 0, &row.category, &text_format)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;
        worksheet
            .write_string_with_format(r, 1, &row.product, &text_format)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;
        worksheet
            .write_number_with_format(r, 2, row.power_watts as f64, &number_format)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;
        worksheet
            .write_number_with_format(r, 3, row.annual_cost_yen as f64, &number_format)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;
    }

    for (col, width) in [(0u16, 12.0), (1, 32.0), (2, 16.0), (3, 18.0)] {
        worksheet
            .set_column_width(col, width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    // グラフ用データとグラフ
    let chart_sheet = workbook.add_worksheet();
    chart_sheet
        .set_name(CHART_SHEET)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    let cost = table.cost_series();
    let power = table.power_series();

    write_series(chart_sheet, 0, TABLE_HEADERS[3], &cost, &header_format, &number_format)?;
    write_series(chart_sheet, 3, TABLE_HEADERS[2], &power, &header_format, &number_format)?;

    if let Some(chart) = build_bar_chart("年間電気代の比較", TABLE_HEADERS[3], 0, &cost) {
        chart_sheet
            .insert_chart(0, 6, &chart)
            .map_err(|e| format!("グラフ挿入エラー: {}", e))?;
    }
    if let Some(chart) = build_bar_chart("消費電力の比較", TABLE_HEADERS[2], 3, &power) {
        chart_sheet
            .insert_chart(18, 6, &chart)
            .map_err(|e| format!("グラフ挿入エラー: {}", e))?;
    }

    // バッファに書き出し
    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

/// 系列を2列（製品名, 値）で書き込む
fn write_series(
    sheet: &mut Worksheet,
    first_col: u16,
    value_header: &str,
    series: &BarSeries,
    header_format: &Format,
    number_format: &Format,
) -> Result<(), String> {
    sheet
        .write_string_with_format(0, first_col, TABLE_HEADERS[1], header_format)
        .map_err(|e| format!("見出し書き込みエラー: {}", e))?;
    sheet
        .write_string_with_format(0, first_col + 1, value_header, header_format)
        .map_err(|e| format!("見出し書き込みエラー: {}", e))?;

    for (i, (key, value)) in series.bars().iter().enumerate() {
        let r = 1 + i as u32;
        sheet
            .write_string(r, first_col, key)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;
        sheet
            .write_number_with_format(r, first_col + 1, *value as f64, number_format)
            .map_err(|e| format!("値書き込みエラー: {}", e))?;
    }

    sheet
        .set_column_width(first_col, 24.0)
        .map_err(|e| format!("列幅設定エラー: {}", e))?;

    Ok(())
}

/// 棒グラフ作成（系列が空ならNone）
fn build_bar_chart(title: &str, value_header: &str, first_col: u16, series: &BarSeries) -> Option<Chart> {
    if series.is_empty() {
        return None;
    }

    let last_row = series.len() as u32;
    let mut chart = Chart::new(ChartType::Column);
    chart.title().set_name(title);
    chart
        .add_series()
        .set_name(value_header)
        .set_categories((CHART_SHEET, 1, first_col, last_row, first_col))
        .set_values((CHART_SHEET, 1, first_col + 1, last_row, first_col + 1));
    chart.legend().set_hidden();

    Some(chart)
}
