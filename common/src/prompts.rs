//! プロンプト生成モジュール
//!
//! 製品ごとの性能問い合わせプロンプトを生成する。
//! 回答の数値行は parser.rs のラベルと一致させること。

/// 消費電力のラベル（単位: W）
pub const POWER_LABEL: &str = "消費電力";

/// 年間電気代のラベル（単位: 円）
pub const COST_LABEL: &str = "年間電気代";

/// 性能問い合わせプロンプト生成
///
/// できること3つ以上・懸念点2つ以上の箇条書きと、
/// `消費電力: 数値` / `年間電気代: 数値` の2行を要求する
///
/// # Arguments
/// * `category` - 家電の種類（例: "エアコン"）
/// * `product` - 製品名
///
/// # Returns
/// Gemini に送るプロンプト文字列
pub fn build_performance_prompt(category: &str, product: &str) -> String {
    format!(
        "家電の種類は「{category}」、製品名は「{product}」です。性能を教えてください。\n\
         できること：３つ以上、懸念点：２つ以上を箇条書きで答えてください。\n\
         {POWER_LABEL}（W）と{COST_LABEL}（円）を以下の形式で答えてください。\n\
         {POWER_LABEL}: 数値\n\
         {COST_LABEL}: 数値\n\
         例:\n\
         {POWER_LABEL}: 1200\n\
         {COST_LABEL}: 18000\n"
    )
}
