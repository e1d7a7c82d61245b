//! 比較の実行
//!
//! 種類（選択順）→製品（入力順）の二重ループで1件ずつ問い合わせる。
//! 1件の失敗は警告として記録し、次の製品へ進む。

use crate::gemini::LanguageModel;
use appliance_compare_common::{
    build_performance_prompt, extract_metrics, ItemOutcome, ProductList, QueryResult, ResultRow,
    ResultTable,
};

/// 実行中のイベント通知先（表示層が実装する）
pub trait RunObserver {
    /// 製品名が1件も入力されていない種類
    fn on_empty_category(&mut self, _category: &str) {}

    /// 問い合わせ開始
    fn on_request(&mut self, _category: &str, _product: &str) {}

    /// 1製品の処理完了
    fn on_outcome(&mut self, _outcome: &ItemOutcome) {}
}

/// 何も表示しない通知先
pub struct SilentObserver;

impl RunObserver for SilentObserver {}

/// 1回の実行結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// 全製品の結果（処理順）
    pub items: Vec<ItemOutcome>,
    /// 抽出に成功した製品のみの比較表
    pub table: ResultTable,
}

impl RunOutcome {
    /// 解析できた製品数
    pub fn parsed_count(&self) -> usize {
        self.table.len()
    }
}

/// 全製品を順番に問い合わせて比較表を作る
///
/// 呼び出しは1件ずつ完了を待ってから次を発行する。
/// 比較表は毎回空の状態から作るため、前回の実行結果は持ち越さない。
pub async fn run_comparison<M, O>(model: &M, products: &ProductList, observer: &mut O) -> RunOutcome
where
    M: LanguageModel + ?Sized,
    O: RunObserver + ?Sized,
{
    let mut outcome = RunOutcome::default();

    for entry in &products.entries {
        if entry.products.is_empty() {
            tracing::warn!(category = %entry.category, "製品名が未入力");
            observer.on_empty_category(&entry.category);
            continue;
        }

        for product in &entry.products {
            observer.on_request(&entry.category, product);

            let result = query_product(model, &entry.category, product).await;
            if let Some(metrics) = result.metrics() {
                outcome.table.push(ResultRow::new(&entry.category, product, metrics));
            }

            let item = ItemOutcome {
                category: entry.category.clone(),
                product: product.clone(),
                result,
            };
            observer.on_outcome(&item);
            outcome.items.push(item);
        }
    }

    tracing::info!(
        total = outcome.items.len(),
        parsed = outcome.parsed_count(),
        "比較完了"
    );

    outcome
}

async fn query_product<M>(model: &M, category: &str, product: &str) -> QueryResult
where
    M: LanguageModel + ?Sized,
{
    let prompt = build_performance_prompt(category, product);

    let reply = match model.generate(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(%category, %product, error = %e, "問い合わせ失敗");
            return QueryResult::Failed {
                message: e.to_string(),
            };
        }
    };

    match extract_metrics(&reply) {
        Ok(metrics) => {
            tracing::info!(
                %category,
                %product,
                power_watts = metrics.power_watts,
                annual_cost_yen = metrics.annual_cost_yen,
                "抽出成功"
            );
            QueryResult::Parsed { reply, metrics }
        }
        Err(e) => {
            tracing::warn!(%category, %product, reason = %e, "数値を抽出できません");
            QueryResult::Unparsed {
                reply,
                reason: e.to_string(),
            }
        }
    }
}
