//! Gemini API連携
//!
//! generateContent エンドポイントにテキストプロンプトを1件送り、
//! 回答テキストを返す。リトライ・バックオフは行わない。

use crate::config::Config;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// テキスト生成モデル
///
/// 実行処理はこのトレイト越しにモデルを呼ぶため、テストではモックに差し替えられる
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// プロンプトに対する回答テキストを返す
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

/// Gemini APIレスポンス
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Gemini APIクライアント
///
/// プロセスごとに1回生成し、参照で渡して使う
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// 設定からクライアントを作成（APIキーは環境変数を優先）
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_key(), config)
    }

    /// APIキーを指定してクライアントを作成
    ///
    /// 空のキーも受け付け、最初の呼び出しで `MissingApiKey` を返す
    pub fn new(api_key: impl Into<String>, config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            api_key: api_key.into(),
            model: config.model.clone(),
            base_url: config.api_base_url.clone(),
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl LanguageModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::MissingApiKey);
        }

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "Gemini呼び出し");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AppError::ApiCall(format!("status {}: {}", status, body.trim())));
        }

        let text = parse_response_body(&body)?;
        tracing::debug!(reply_len = text.len(), "Gemini応答受信");
        Ok(text)
    }
}

/// レスポンスJSONから回答テキストを取り出す
///
/// 先頭候補のテキストパートをすべて連結する
fn parse_response_body(body: &str) -> Result<String> {
    let response: GeminiResponse =
        serde_json::from_str(body).map_err(|e| AppError::ApiParse(e.to_string()))?;

    let candidate = match response.candidates.first() {
        Some(c) => c,
        None => {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "不明".into());
            return Err(AppError::ApiParse(format!("候補がありません (blockReason: {})", reason)));
        }
    };

    let text: String = candidate
        .content
        .iter()
        .flat_map(|c| c.parts.iter())
        .filter_map(|p| p.text.as_deref())
        .collect();

    if text.is_empty() {
        return Err(AppError::ApiParse(format!(
            "回答テキストが空です (finishReason: {})",
            candidate.finish_reason.as_deref().unwrap_or("不明")
        )));
    }

    Ok(text)
}
