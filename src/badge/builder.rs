//! URL解決からスニペット生成までをまとめたビルダー

use super::endpoint::{BadgeMetric, BadgeService, BadgeUrls};
use super::identifier::ResolvedSource;
use super::snippet::{BadgeImageService, OutputFormat};

/// 1指標ぶんの生成結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub metric: BadgeMetric,
    /// バッジデータのエンドポイントURL
    pub badge_url: String,
    /// プレビュー用の画像URL
    pub image_url: String,
    /// 貼り付け用コード
    pub code: String,
}

/// バッジビルダー
#[derive(Debug, Clone, Default)]
pub struct BadgeBuilder {
    service: BadgeService,
    images: BadgeImageService,
}

impl BadgeBuilder {
    pub fn new(service: BadgeService, images: BadgeImageService) -> Self {
        Self { service, images }
    }

    /// エンドポイントURLを構築（識別子が空ならNone）
    pub fn urls(&self, source: &ResolvedSource) -> Option<BadgeUrls> {
        source
            .has_identifier()
            .then(|| self.service.badge_urls(&source.identifier))
    }

    /// 全指標のスニペットを表示順に生成（識別子が空なら空）
    pub fn snippets(&self, source: &ResolvedSource, format: OutputFormat) -> Vec<Snippet> {
        let Some(urls) = self.urls(source) else {
            return Vec::new();
        };

        urls.iter()
            .map(|(metric, badge_url)| Snippet {
                metric,
                badge_url: badge_url.to_string(),
                image_url: self.images.image_url(badge_url),
                code: self.images.format(format, badge_url, &source.url),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
