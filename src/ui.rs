//! 対話式入力と実行中の表示
//!
//! 家電の種類は MultiSelect で選び、製品名は1行ずつ入力する（空行で終了）

use crate::compare::RunObserver;
use crate::error::Result;
use appliance_compare_common::input::normalize_categories;
use appliance_compare_common::{ItemOutcome, QueryResult, APPLIANCE_CATEGORIES};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 家電の種類を選択
///
/// `preset` が指定されていれば対話を省略する（空白のみの指定と重複は除く）
pub fn select_categories(preset: &[String]) -> Result<Vec<String>> {
    if !preset.is_empty() {
        return Ok(normalize_categories(preset));
    }

    // 先頭の種類のみデフォルト選択
    let defaults: Vec<bool> = (0..APPLIANCE_CATEGORIES.len()).map(|i| i == 0).collect();

    let chosen = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("比較したい家電の種類を選択してください（スペースで選択、Enterで決定）")
        .items(APPLIANCE_CATEGORIES)
        .defaults(&defaults)
        .interact()?;

    Ok(chosen
        .into_iter()
        .map(|i| APPLIANCE_CATEGORIES[i].to_string())
        .collect())
}

/// 1つの種類の製品名を複数行で入力
///
/// 空行を入力すると終了。戻り値は改行区切りのテキスト
pub fn read_products(category: &str) -> Result<String> {
    println!(
        "\n{}の製品名を1行ずつ入力してください（空行で終了）",
        style(category).bold()
    );

    let mut lines: Vec<String> = Vec::new();
    loop {
        let line: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt((lines.len() + 1).to_string())
            .allow_empty(true)
            .interact_text()?;

        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

/// 実行中の進捗と製品ごとの結果を端末に表示
#[derive(Default)]
pub struct TerminalReporter {
    spinner: Option<ProgressBar>,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn finish_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl RunObserver for TerminalReporter {
    fn on_empty_category(&mut self, category: &str) {
        println!(
            "{}",
            style(format!("⚠ {}の製品名が入力されていません。", category)).yellow()
        );
    }

    fn on_request(&mut self, category: &str, product: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner());
        spinner.set_message(format!("{} - {} の性能を問い合わせ中...", category, product));
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn on_outcome(&mut self, outcome: &ItemOutcome) {
        self.finish_spinner();
        print!("{}", format_outcome(outcome));
    }
}

impl Drop for TerminalReporter {
    fn drop(&mut self) {
        self.finish_spinner();
    }
}

/// 1製品の結果表示を組み立てる
///
/// 回答があれば見出しと全文、抽出に失敗した場合は警告と返答全文を続ける
pub fn format_outcome(outcome: &ItemOutcome) -> String {
    let ItemOutcome {
        category,
        product,
        result,
    } = outcome;

    let mut out = String::new();
    match result {
        QueryResult::Parsed { reply, .. } => {
            push_reply(&mut out, category, product, reply);
        }
        QueryResult::Unparsed { reply, .. } => {
            push_reply(&mut out, category, product, reply);
            let warning = format!("⚠ {} - {} の性能情報を正しく解析できませんでした。", category, product);
            out.push_str(&format!("{}\n", style(warning).yellow()));
            out.push_str("=== APIの返答全文 ===\n");
            out.push_str(reply);
            out.push('\n');
        }
        QueryResult::Failed { message } => {
            let error = format!(
                "✖ {} - {} の情報取得中にエラーが発生しました: {}",
                category, product, message
            );
            out.push_str(&format!("{}\n", style(error).red()));
        }
    }
    out
}

fn push_reply(out: &mut String, category: &str, product: &str, reply: &str) {
    out.push_str(&format!("\n#### {} - {} の性能情報（Gemini回答）\n", category, product));
    out.push_str(reply);
    out.push('\n');
}
