//! バッジエンドポイントURLの構築

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// バッジデータサービスのデフォルトURL
pub const DEFAULT_BADGE_SERVICE_URL: &str = "https://figma-plugin-badges.vercel.app";

/// バッジの指標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeMetric {
    /// インストール数
    Installs,
    /// いいね数
    Likes,
}

impl BadgeMetric {
    /// APIパスに使う識別子
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeMetric::Installs => "installs",
            BadgeMetric::Likes => "likes",
        }
    }

    /// 表示名を取得
    pub fn display_name(&self) -> &'static str {
        match self {
            BadgeMetric::Installs => "Installs",
            BadgeMetric::Likes => "Likes",
        }
    }

    /// 全指標を表示順に取得
    pub fn all() -> &'static [BadgeMetric] {
        &[BadgeMetric::Installs, BadgeMetric::Likes]
    }
}

impl std::fmt::Display for BadgeMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// 指標ごとのエンドポイントURL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeUrls {
    pub installs: String,
    pub likes: String,
}

impl BadgeUrls {
    /// 指標に対応するURLを取得
    pub fn get(&self, metric: BadgeMetric) -> &str {
        match metric {
            BadgeMetric::Installs => &self.installs,
            BadgeMetric::Likes => &self.likes,
        }
    }

    /// (指標, URL) を表示順に列挙
    pub fn iter(&self) -> impl Iterator<Item = (BadgeMetric, &str)> {
        BadgeMetric::all().iter().map(move |m| (*m, self.get(*m)))
    }
}

/// バッジデータサービス
///
/// `<base>/api/<metric>/<identifier>` 形式でカウントを返すエンドポイント群。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeService {
    base_url: String,
}

impl Default for BadgeService {
    fn default() -> Self {
        Self::new(DEFAULT_BADGE_SERVICE_URL)
    }
}

impl BadgeService {
    /// ベースURLを指定して作成（末尾の `/` は取り除く）
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// ベースURL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 単一指標のエンドポイントURL
    pub fn endpoint(&self, metric: BadgeMetric, identifier: &str) -> String {
        format!("{}/api/{}/{}", self.base_url, metric.as_str(), identifier)
    }

    /// 両指標のエンドポイントURL
    pub fn badge_urls(&self, identifier: &str) -> BadgeUrls {
        BadgeUrls {
            installs: self.endpoint(BadgeMetric::Installs, identifier),
            likes: self.endpoint(BadgeMetric::Likes, identifier),
        }
    }
}

/// デフォルトのサービスでエンドポイントURLを構築
pub fn build_badge_urls(identifier: &str) -> BadgeUrls {
    BadgeService::default().badge_urls(identifier)
}

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod tests;
