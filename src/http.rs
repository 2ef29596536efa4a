//! バッジデータの取得
//!
//! preview コマンド専用。コア処理はネットワークに触れない。

use crate::badge::{BadgeMetric, BadgeUrls};
use crate::error::{BadgeError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（秒）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(10)),
            user_agent: "fpb-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// shields.io endpoint バッジのレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeData {
    pub schema_version: u32,
    pub label: String,
    pub message: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub is_error: bool,
}

/// 単一のエンドポイントからバッジデータを取得
pub async fn fetch_badge(client: &Client, url: &str) -> Result<BadgeData> {
    tracing::debug!(url, "fetching badge data");

    let response = client.get(url).send().await?;
    let status = response.status().as_u16();

    if !response.status().is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(BadgeError::BadgeApi { status, message });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// 両指標のバッジデータを並行取得（スピナー付き）
pub async fn fetch_all(
    client: &Client,
    urls: &BadgeUrls,
) -> Vec<(BadgeMetric, Result<BadgeData>)> {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Fetching badges...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let (installs, likes) = tokio::join!(
        fetch_badge(client, &urls.installs),
        fetch_badge(client, &urls.likes)
    );

    pb.finish_and_clear();

    vec![
        (BadgeMetric::Installs, installs),
        (BadgeMetric::Likes, likes),
    ]
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
