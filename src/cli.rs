use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "appliance-compare")]
#[command(about = "家電性能比較ツール（Gemini API利用）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 製品名を入力してGeminiに性能を問い合わせ、比較する
    Compare {
        /// 家電の種類（複数指定可。省略時は対話で選択）
        #[arg(short, long = "category")]
        categories: Vec<String>,

        /// 比較表とグラフをExcelに出力
        #[arg(long)]
        excel: Option<PathBuf>,

        /// 比較表をJSONに出力
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// 保存したGeminiの回答から消費電力と年間電気代を抽出
    Extract {
        /// 回答テキストファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// モデル名を設定
        #[arg(long)]
        set_model: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
