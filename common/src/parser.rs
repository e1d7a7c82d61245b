//! 回答パーサー
//!
//! Gemini の自由記述の回答から消費電力と年間電気代を抽出する。
//!
//! 抽出ルール（これ以外のフォールバックは行わない）:
//! - ラベルごとに独立して検索（出現順は問わない）
//! - ラベル直後のコロンは半角 `:` / 全角 `：` / なし
//! - 太字マークダウン `**` と空白を許容
//! - 数値は整数のみ、桁区切りカンマを許容
//! - 全角数字（`０`〜`９`）は半角に読み替える。全角カンマ `，` は区切りとして扱わない
//! - 値は `u64` に収まる範囲のみ。これを超える値は解釈できないものとして扱う

use crate::error::{Error, Result};
use crate::prompts::{COST_LABEL, POWER_LABEL};
use crate::types::Metrics;
use regex::Regex;

lazy_static::lazy_static! {
    static ref POWER_RE: Regex = Regex::new(r"消費電力[:：]?\s*\**\s*([\d,]+)").unwrap();
    static ref COST_RE: Regex = Regex::new(r"年間電気代[:：]?\s*\**\s*([\d,]+)").unwrap();
}

/// 回答から2つの数値を抽出
///
/// # Arguments
/// * `reply` - Gemini の回答テキスト
///
/// # Returns
/// * `Ok(Metrics)` - 両方のラベルが見つかり整数として解釈できた
/// * `Err(Error::Parse)` - どちらかが見つからない、整数でない、または `u64` の範囲を超える
///
/// # Examples
/// ```
/// use appliance_compare_common::extract_metrics;
///
/// let metrics = extract_metrics("年間電気代: 18,000\n消費電力：**1200**").unwrap();
/// assert_eq!(metrics.power_watts, 1200);
/// assert_eq!(metrics.annual_cost_yen, 18000);
/// ```
pub fn extract_metrics(reply: &str) -> Result<Metrics> {
    let power_watts = extract_labeled_number(&POWER_RE, POWER_LABEL, reply)?;
    let annual_cost_yen = extract_labeled_number(&COST_RE, COST_LABEL, reply)?;

    Ok(Metrics {
        power_watts,
        annual_cost_yen,
    })
}

fn extract_labeled_number(re: &Regex, label: &str, reply: &str) -> Result<u64> {
    let caps = re
        .captures(reply)
        .ok_or_else(|| Error::Parse(format!("{}が見つかりません", label)))?;

    let digits = to_ascii_digits(&caps[1]);
    digits
        .parse::<u64>()
        .map_err(|e| Error::Parse(format!("{}の値を整数として解釈できません: {} ({})", label, &caps[1], e)))
}

/// 桁区切りカンマを除き、全角数字を半角にそろえる
fn to_ascii_digits(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != ',')
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            _ => c,
        })
        .collect()
}
