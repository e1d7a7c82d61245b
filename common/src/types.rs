//! 比較処理の型定義
//!
//! - ProductList: 種類ごとの製品名リスト（入力）
//! - QueryResult: 1製品あたりの問い合わせ結果
//! - ResultRow: 数値抽出に成功した製品の行

use serde::{Deserialize, Serialize};

/// 1つの家電種類と、その製品名（入力順）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProducts {
    pub category: String,
    pub products: Vec<String>,
}

/// 種類→製品名リストの対応（選択順を保持）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductList {
    pub entries: Vec<CategoryProducts>,
}

impl ProductList {
    /// (種類, 製品名) の組を処理順に列挙
    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|entry| {
            entry
                .products
                .iter()
                .map(move |p| (entry.category.as_str(), p.as_str()))
        })
    }

    /// 製品の総数
    pub fn item_count(&self) -> usize {
        self.entries.iter().map(|e| e.products.len()).sum()
    }
}

/// 回答から抽出した2つの数値
///
/// 上限は `u64::MAX`（超える値は抽出側で解釈不能になる）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// 消費電力（W）
    pub power_watts: u64,
    /// 年間電気代（円）
    pub annual_cost_yen: u64,
}

/// 1製品の問い合わせ結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// 数値抽出に成功
    Parsed { reply: String, metrics: Metrics },
    /// 回答は得られたが数値を抽出できなかった
    Unparsed { reply: String, reason: String },
    /// API呼び出しに失敗
    Failed { message: String },
}

impl QueryResult {
    pub fn metrics(&self) -> Option<Metrics> {
        match self {
            QueryResult::Parsed { metrics, .. } => Some(*metrics),
            _ => None,
        }
    }

    pub fn reply(&self) -> Option<&str> {
        match self {
            QueryResult::Parsed { reply, .. } | QueryResult::Unparsed { reply, .. } => Some(reply.as_str()),
            QueryResult::Failed { .. } => None,
        }
    }
}

/// 製品ごとの結果（種類・製品名付き）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub category: String,
    pub product: String,
    pub result: QueryResult,
}

/// 比較表の1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    pub category: String,        // 種類
    pub product: String,         // 製品名
    pub power_watts: u64,        // 消費電力（W）
    pub annual_cost_yen: u64,    // 年間電気代（円）
}

impl ResultRow {
    pub fn new(category: &str, product: &str, metrics: Metrics) -> Self {
        Self {
            category: category.to_string(),
            product: product.to_string(),
            power_watts: metrics.power_watts,
            annual_cost_yen: metrics.annual_cost_yen,
        }
    }
}
