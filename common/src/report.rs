//! 比較表とグラフ系列
//!
//! ResultTable は1回の実行ごとに新しく作られ、抽出に成功した行だけを
//! 処理順に保持する。グラフ系列は製品名をキーにするため、同名の製品は
//! 後勝ちで上書きされる（表示位置は最初の出現位置のまま）。

use crate::types::ResultRow;
use serde::Serialize;

/// 比較表の列見出し
pub const TABLE_HEADERS: [&str; 4] = ["種類", "製品名", "消費電力（W）", "年間電気代（円）"];

/// 比較表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// 解析できた製品数
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 年間電気代（円）の系列
    pub fn cost_series(&self) -> BarSeries {
        BarSeries::from_pairs(
            self.rows
                .iter()
                .map(|r| (r.product.as_str(), r.annual_cost_yen)),
        )
    }

    /// 消費電力（W）の系列
    pub fn power_series(&self) -> BarSeries {
        BarSeries::from_pairs(self.rows.iter().map(|r| (r.product.as_str(), r.power_watts)))
    }
}

/// 製品名をキーにした棒グラフ用の系列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarSeries {
    bars: Vec<(String, u64)>,
    collisions: Vec<String>,
}

impl BarSeries {
    /// (キー, 値) から系列を作成（同じキーは後勝ち）
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let mut series = Self::default();
        for (key, value) in pairs {
            series.insert(key, value);
        }
        series
    }

    fn insert(&mut self, key: &str, value: u64) {
        match self.bars.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => {
                slot.1 = value;
                if !self.collisions.iter().any(|c| c == key) {
                    self.collisions.push(key.to_string());
                }
            }
            None => self.bars.push((key.to_string(), value)),
        }
    }

    pub fn bars(&self) -> &[(String, u64)] {
        &self.bars
    }

    /// 上書きが発生したキー
    pub fn collisions(&self) -> &[String] {
        &self.collisions
    }

    pub fn max_value(&self) -> u64 {
        self.bars.iter().map(|(_, v)| *v).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Metrics;

    fn row(category: &str, product: &str, power: u64, cost: u64) -> ResultRow {
        ResultRow::new(
            category,
            product,
            Metrics {
                power_watts: power,
                annual_cost_yen: cost,
            },
        )
    }

    #[test]
    fn test_table_keeps_processing_order() {
        let mut table = ResultTable::new();
        table.push(row("エアコン", "B", 900, 12000));
        table.push(row("冷蔵庫", "A", 250, 8000));

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].product, "B");
        assert_eq!(table.rows()[1].product, "A");
    }

    #[test]
    fn test_series_values() {
        let mut table = ResultTable::new();
        table.push(row("エアコン", "A", 900, 12000));
        table.push(row("エアコン", "B", 1200, 18000));

        let cost = table.cost_series();
        assert_eq!(cost.bars(), &[("A".to_string(), 12000), ("B".to_string(), 18000)]);
        assert_eq!(cost.max_value(), 18000);

        let power = table.power_series();
        assert_eq!(power.bars(), &[("A".to_string(), 900), ("B".to_string(), 1200)]);
        assert!(power.collisions().is_empty());
    }

    #[test]
    fn test_series_duplicate_key_last_write_wins() {
        let mut table = ResultTable::new();
        table.push(row("エアコン", "X", 900, 12000));
        table.push(row("エアコン", "Y", 500, 7000));
        table.push(row("冷蔵庫", "X", 300, 9000));

        // 表は重複を保持
        assert_eq!(table.len(), 3);

        let cost = table.cost_series();
        assert_eq!(cost.len(), 2);
        assert_eq!(cost.bars()[0], ("X".to_string(), 9000));
        assert_eq!(cost.bars()[1], ("Y".to_string(), 7000));
        assert_eq!(cost.collisions(), &["X".to_string()]);
    }

    #[test]
    fn test_empty_table() {
        let table = ResultTable::new();
        assert!(table.is_empty());
        assert!(table.cost_series().is_empty());
        assert_eq!(table.power_series().max_value(), 0);
    }

    #[test]
    fn test_table_serializes_as_array() {
        let mut table = ResultTable::new();
        table.push(row("洗濯機", "W", 1000, 5000));
        let json = serde_json::to_value(&table).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["product"], "W");
    }
}
