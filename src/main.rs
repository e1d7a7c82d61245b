use appliance_compare::{cli, compare, config, error, export, gemini, render, ui};
use appliance_compare_common::input::{collect_products, ensure_selection};
use appliance_compare_common::{extract_metrics, Error as CommonError};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use console::style;
use error::Result;
use gemini::GeminiClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Compare { categories, excel, json } => {
            println!("🔌 appliance-compare - 家電性能比較（Gemini API利用）\n");

            // 1. 種類選択（空なら何もせず終了）
            let selection = ui::select_categories(&categories)?;
            if let Err(e) = ensure_selection(&selection) {
                println!("{}", style(format!("⚠ {}", e)).yellow());
                return Ok(());
            }

            // 2. 製品名入力
            let mut inputs = Vec::with_capacity(selection.len());
            for category in &selection {
                let text = ui::read_products(category)?;
                inputs.push((category.clone(), text));
            }
            let products = collect_products(&inputs)?;

            // 3. 問い合わせ
            let client = GeminiClient::from_config(&config)?;
            println!(
                "\n[1/2] {}件の製品を問い合わせ中... (モデル: {})",
                products.item_count(),
                client.model()
            );
            let mut reporter = ui::TerminalReporter::new();
            let outcome = compare::run_comparison(&client, &products, &mut reporter).await;
            drop(reporter);

            // 4. 比較結果
            println!("\n[2/2] 比較結果\n");
            print!("{}", render::format_report(&outcome.table));

            if outcome.table.is_empty() {
                if excel.is_some() || json.is_some() {
                    tracing::info!("解析できた製品がないためエクスポートを省略");
                }
                return Ok(());
            }

            let title = export::default_title();
            if let Some(path) = excel {
                let written = export::export_excel(&outcome.table, &path, &title)?;
                println!("✔ Excel出力: {}", written.display());
            }
            if let Some(path) = json {
                let written = export::export_json(&outcome.table, &path, &title)?;
                println!("✔ JSON出力: {}", written.display());
            }
        }

        Commands::Extract { input } => {
            let reply = std::fs::read_to_string(&input)?;
            match extract_metrics(&reply) {
                Ok(metrics) => {
                    println!("消費電力: {} W", render::format_thousands(metrics.power_watts));
                    println!("年間電気代: {} 円", render::format_thousands(metrics.annual_cost_yen));
                }
                Err(CommonError::Parse(reason)) => {
                    println!("{}", style(format!("⚠ 解析できませんでした: {}", reason)).yellow());
                    println!("=== 返答全文 ===");
                    println!("{}", reply);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Config { set_api_key, set_model, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if let Some(model) = set_model {
                config.set_model(model)?;
                println!("✔ モデルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  APIベースURL: {}", config.api_base_url);
                match config.timeout_seconds {
                    Some(secs) => println!("  タイムアウト: {}秒", secs),
                    None => println!("  タイムアウト: なし"),
                }
                println!(
                    "  APIキー: {}",
                    if config.api_key().is_empty() { "未設定" } else { "設定済み" }
                );
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

/// RUST_LOG 未設定時のフィルタ
fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "info,appliance_compare=debug"
    } else {
        "warn"
    }
}

fn init_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_log_filter(verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
