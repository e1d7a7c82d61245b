//! Appliance Compare Common Library
//!
//! 家電性能比較のコアロジック（UI・ネットワーク非依存）:
//! 入力の正規化、プロンプト生成、回答からの数値抽出、比較表の集計

pub mod types;
pub mod error;
pub mod input;
pub mod prompts;
pub mod parser;
pub mod report;

#[cfg(feature = "excel")]
pub mod export;

pub use types::{CategoryProducts, ItemOutcome, Metrics, ProductList, QueryResult, ResultRow};
pub use error::{Error, Result};
pub use input::{parse_product_lines, APPLIANCE_CATEGORIES};
pub use prompts::{build_performance_prompt, COST_LABEL, POWER_LABEL};
pub use parser::extract_metrics;
pub use report::{BarSeries, ResultTable, TABLE_HEADERS};
