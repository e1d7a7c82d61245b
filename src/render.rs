//! 比較結果のテキスト描画
//!
//! 端末幅の計算は全角文字を2桁として扱う

use appliance_compare_common::{BarSeries, ResultTable, TABLE_HEADERS};
use console::measure_text_width;

/// 棒の最大長（文字数）
pub const BAR_WIDTH: usize = 40;

/// 比較結果全体を描画
///
/// 解析できた製品数が0なら警告1行のみ
pub fn format_report(table: &ResultTable) -> String {
    let mut out = format!("## 解析できた製品数: {}\n", table.len());

    if table.is_empty() {
        out.push_str("⚠ 性能情報が取得できませんでした。\n");
        return out;
    }

    out.push_str("\n### 製品性能比較表\n");
    out.push_str(&format_table(table));

    let cost = table.cost_series();
    let power = table.power_series();
    log_collisions(&cost);

    out.push_str("\n### 年間電気代の比較\n");
    out.push_str(&format_bar_chart(&cost));

    out.push_str("\n### 消費電力の比較\n");
    out.push_str(&format_bar_chart(&power));

    out
}

fn log_collisions(series: &BarSeries) {
    for key in series.collisions() {
        tracing::warn!(product = %key, "同名の製品があるためグラフは後の値で上書きされます");
    }
}

/// 比較表を描画
pub fn format_table(table: &ResultTable) -> String {
    let cells: Vec<[String; 4]> = table
        .rows()
        .iter()
        .map(|r| {
            [
                r.category.clone(),
                r.product.clone(),
                format_thousands(r.power_watts),
                format_thousands(r.annual_cost_yen),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(measure_text_width);
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(measure_text_width(cell));
        }
    }

    let mut out = String::new();
    let header: Vec<String> = TABLE_HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad_right(h, *w))
        .collect();
    out.push_str(header.join(" | ").trim_end());
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    for row in &cells {
        let line = format!(
            "{} | {} | {} | {}",
            pad_right(&row[0], widths[0]),
            pad_right(&row[1], widths[1]),
            pad_left(&row[2], widths[2]),
            pad_left(&row[3], widths[3]),
        );
        out.push_str(&line);
        out.push('\n');
    }

    out
}

/// 横棒グラフを描画
pub fn format_bar_chart(series: &BarSeries) -> String {
    let label_width = series
        .bars()
        .iter()
        .map(|(k, _)| measure_text_width(k))
        .max()
        .unwrap_or(0);
    let max = series.max_value();

    let mut out = String::new();
    for (key, value) in series.bars() {
        let len = bar_length(*value, max);
        out.push_str(&format!(
            "{} │{} {}\n",
            pad_right(key, label_width),
            "█".repeat(len),
            format_thousands(*value)
        ));
    }
    out
}

/// 値を最大値基準で BAR_WIDTH に縮尺（正の値は最低1）
fn bar_length(value: u64, max: u64) -> usize {
    if max == 0 || value == 0 {
        return 0;
    }
    let len = (value as u128 * BAR_WIDTH as u128 / max as u128) as usize;
    len.max(1)
}

/// 3桁区切り
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(measure_text_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(measure_text_width(s));
    format!("{}{}", " ".repeat(pad), s)
}
