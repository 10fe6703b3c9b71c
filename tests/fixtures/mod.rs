// 統合テスト用のフェイク実装とテストデータ
#![allow(dead_code)]

use async_trait::async_trait;
use book_summary::Summarizer;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const TWO_CHAPTER_BOOK: &str = "CHAPTER ONE\nHello world.\n\nCHAPTER TWO\nGoodbye world.";

/// 見出しと本文がN章分並んだ本
pub fn book_with_chapters(count: usize) -> String {
    (1..=count)
        .map(|i| format!("CHAPTER {i}\n\n{}\n\n", "Some prose here. ".repeat(i)))
        .collect()
}

pub fn write_book(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("book.txt");
    fs::write(&path, contents).unwrap();
    path
}

/// 文字数を要約として返す決定的なフェイク
pub struct LengthSummarizer;

#[async_trait]
impl Summarizer for LengthSummarizer {
    async fn summarize(&self, text: &str) -> anyhow::Result<String> {
        Ok(format!("<{} chars>", text.chars().count()))
    }
}

/// 指定した語を含む章だけ失敗するフェイク
pub struct FailOnSummarizer {
    pub needle: &'static str,
}

#[async_trait]
impl Summarizer for FailOnSummarizer {
    async fn summarize(&self, text: &str) -> anyhow::Result<String> {
        if text.contains(self.needle) {
            anyhow::bail!("rate limited");
        }
        Ok(format!("<{} chars>", text.chars().count()))
    }
}

/// 短い章ほど遅く返すフェイク（完了順を章順と逆にする）
pub struct ShortestLastSummarizer;

#[async_trait]
impl Summarizer for ShortestLastSummarizer {
    async fn summarize(&self, text: &str) -> anyhow::Result<String> {
        let delay = 400u64.saturating_sub(text.len() as u64);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(format!("<{} chars>", text.chars().count()))
    }
}

/// `requests`件のチャット補完リクエストに固定の要約で応答するHTTPサーバー
///
/// 各接続はConnection: closeで1リクエストのみ処理する。ベースURLを返す。
pub fn spawn_fake_api(summary: &'static str, requests: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let body = format!(
            r#"{{"choices":[{{"index":0,"message":{{"role":"assistant","content":"{summary}"}}}}]}}"#
        );
        for stream in listener.incoming().take(requests) {
            let mut stream = stream.unwrap();
            read_full_request(&mut stream);
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        }
    });

    format!("http://{addr}/v1")
}

fn read_full_request(stream: &mut std::net::TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    line.to_ascii_lowercase()
                        .strip_prefix("content-length:")
                        .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                return;
            }
        }
    }
}
