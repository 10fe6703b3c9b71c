// テスト用のフェイク実装
// 決定的に振る舞うSummarizerとヘルパー

use crate::core::{Chapter, Summarizer};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// 章テキストの列から共有用の章リストを作る
pub fn chapters_from(texts: &[&str]) -> Arc<[Chapter]> {
    Chapter::from_texts(texts.iter().map(|t| t.to_string()).collect()).into()
}

/// 文字数を`<N chars>`の形で返す
pub struct LengthSummarizer;

#[async_trait]
impl Summarizer for LengthSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        Ok(format!("<{} chars>", text.chars().count()))
    }
}

/// 常に失敗する
pub struct FailingSummarizer;

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(&self, _text: &str) -> Result<String> {
        Err(anyhow::anyhow!("503 Service Unavailable"))
    }
}

/// 呼び出されるとパニックする
pub struct PanickingSummarizer;

#[async_trait]
impl Summarizer for PanickingSummarizer {
    async fn summarize(&self, _text: &str) -> Result<String> {
        panic!("summarizer panicked");
    }
}

/// 指定時間待ってから応答する
pub struct SlowSummarizer {
    delay: Duration,
}

impl SlowSummarizer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Summarizer for SlowSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        tokio::time::sleep(self.delay).await;
        Ok(format!("<{} chars>", text.chars().count()))
    }
}

/// 長いテキストほど早く応答する（完了順を章順と逆にするため）
pub struct LongestFirstSummarizer {
    base_ms: u64,
}

impl LongestFirstSummarizer {
    pub fn new(base_ms: u64) -> Self {
        Self { base_ms }
    }
}

#[async_trait]
impl Summarizer for LongestFirstSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        let len = text.chars().count() as u64;
        tokio::time::sleep(Duration::from_millis(self.base_ms.saturating_sub(len))).await;
        Ok(format!("<{len} chars>"))
    }
}

/// テキストをそのまま返し、テキストごとの呼び出し回数を記録する
#[derive(Default)]
pub struct CountingSummarizer {
    calls: Mutex<HashMap<String, usize>>,
}

impl CountingSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_calls_per_text(&self) -> usize {
        self.calls.lock().unwrap().values().copied().max().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl Summarizer for CountingSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        *self.calls.lock().unwrap().entry(text.to_string()).or_insert(0) += 1;
        tokio::task::yield_now().await;
        Ok(text.to_string())
    }
}
