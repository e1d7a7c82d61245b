//! 入力の正規化
//!
//! 家電種類の選択と、種類ごとの複数行テキスト（1行1製品）を
//! ProductList に変換する

use crate::error::{Error, Result};
use crate::types::{CategoryProducts, ProductList};

/// 選択できる家電の種類（先頭がデフォルト選択）
pub const APPLIANCE_CATEGORIES: &[&str] = &["エアコン", "冷蔵庫", "洗濯機"];

/// 選択が空でないことを確認
///
/// 空の場合は以降の処理（API呼び出しを含む）を一切行わない
pub fn ensure_selection<S: AsRef<str>>(selection: &[S]) -> Result<()> {
    if selection.is_empty() {
        return Err(Error::EmptySelection);
    }
    Ok(())
}

/// 指定された種類名を正規化
///
/// トリムして空のものを捨て、重複は最初の出現位置で1つにまとめる
pub fn normalize_categories<S: AsRef<str>>(categories: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for category in categories {
        let category = category.as_ref().trim();
        if category.is_empty() || out.iter().any(|c| c == category) {
            continue;
        }
        out.push(category.to_string());
    }
    out
}

/// 複数行テキストを製品名リストに分解
///
/// 各行をトリムし、空行は捨てる。順序は保持、重複は除去しない。
///
/// # Examples
/// ```
/// use appliance_compare_common::parse_product_lines;
///
/// let products = parse_product_lines("  Product A \n\n\tProduct B\r\n   \n");
/// assert_eq!(products, vec!["Product A", "Product B"]);
/// ```
pub fn parse_product_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// (種類, 入力テキスト) の組から ProductList を作成
///
/// # Arguments
/// * `inputs` - 選択順の (種類, 複数行テキスト)
///
/// # Returns
/// * `Ok(ProductList)` - 種類ごとの製品名（製品が0件の種類も保持）
/// * `Err(Error::EmptySelection)` - 種類が1つも選択されていない
pub fn collect_products<C, T>(inputs: &[(C, T)]) -> Result<ProductList>
where
    C: AsRef<str>,
    T: AsRef<str>,
{
    if inputs.is_empty() {
        return Err(Error::EmptySelection);
    }

    let entries = inputs
        .iter()
        .map(|(category, text)| CategoryProducts {
            category: category.as_ref().to_string(),
            products: parse_product_lines(text.as_ref()),
        })
        .collect();

    Ok(ProductList { entries })
}
