//! OpenAI互換のチャット補完APIを使う要約クライアント
//!
//! systemロールに要約指示、userロールに章テキストを載せて1回だけ呼び出し、
//! 最初のchoiceのメッセージ本文を要約として返す。

use crate::core::{ProcessingResult, Summarizer, SummaryError};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_SYSTEM_PROMPT: &str = "Give me summary of this chapter";

/// チャット補完リクエスト
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

/// チャット補完レスポンス（必要なフィールドのみ）
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// クライアント設定
#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub system_prompt: String,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

// APIキーをログに出さない
impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("system_prompt", &self.system_prompt)
            .finish()
    }
}

/// OpenAI互換APIによる要約クライアント
#[derive(Debug, Clone)]
pub struct OpenAiSummarizer {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiSummarizer {
    pub fn new(config: OpenAiConfig) -> ProcessingResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(SummaryError::configuration("APIトークンが空です"));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| SummaryError::client(format!("HTTPクライアント作成失敗: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    fn build_request<'a>(&'a self, text: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: vec![
                Message {
                    role: "system",
                    content: &self.config.system_prompt,
                },
                Message {
                    role: "user",
                    content: text,
                },
            ],
        }
    }
}

/// 最初のchoiceの本文を取り出す
fn first_choice_content(response: ChatResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| anyhow::anyhow!("レスポンスにchoiceが含まれていません"))
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        let request = self.build_request(text);

        let response = self
            .client
            .post(self.config.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .context("要約APIへのリクエスト送信に失敗しました")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("要約APIエラー ({status}): {error_text}");
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .context("要約APIのレスポンス解析に失敗しました")?;

        first_choice_content(chat_response)
    }
}
