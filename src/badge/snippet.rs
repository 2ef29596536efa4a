//! 埋め込みスニペットの整形
//!
//! バッジ画像サービス（shields.io の endpoint バッジ）を指す画像を、
//! プラグインページへのリンクで包んだ HTML / Markdown 断片を生成する。

use clap::ValueEnum;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// バッジ画像サービスのデフォルトURL
pub const DEFAULT_IMAGE_SERVICE_URL: &str = "https://img.shields.io/endpoint";

/// 出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Markdown,
}

impl OutputFormat {
    /// 表示名を取得
    pub fn display_name(&self) -> &'static str {
        match self {
            OutputFormat::Html => "HTML",
            OutputFormat::Markdown => "Markdown",
        }
    }

    /// もう一方の形式
    pub fn toggle(self) -> Self {
        match self {
            OutputFormat::Html => OutputFormat::Markdown,
            OutputFormat::Markdown => OutputFormat::Html,
        }
    }

    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Html, OutputFormat::Markdown]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// バッジ画像サービス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeImageService {
    base_url: String,
}

impl Default for BadgeImageService {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_SERVICE_URL)
    }
}

impl BadgeImageService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// エンドポイントURLを `url` クエリに渡した画像URL
    pub fn image_url(&self, badge_url: &str) -> String {
        format!("{}?url={}", self.base_url, encode_query_value(badge_url))
    }

    /// スニペットを整形
    pub fn format(&self, format: OutputFormat, badge_url: &str, plugin_url: &str) -> String {
        let image_url = self.image_url(badge_url);
        match format {
            OutputFormat::Html => format!(
                r#"<a href="{}"><img src="{}"/></a>"#,
                escape_attribute(plugin_url),
                escape_attribute(&image_url)
            ),
            OutputFormat::Markdown => format!("[![]({image_url})]({plugin_url})"),
        }
    }
}

/// デフォルトの画像サービスでスニペットを整形
pub fn format_snippet(format: OutputFormat, badge_url: &str, plugin_url: &str) -> String {
    BadgeImageService::default().format(format, badge_url, plugin_url)
}

/// `url=` クエリ値を壊す文字
///
/// `:` や `/` はそのまま残す。`%` は既存のエスケープとみなして触らない。
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>');

fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// HTML属性値のエスケープ
fn escape_attribute(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
#[path = "snippet_test.rs"]
mod tests;
