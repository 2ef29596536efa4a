//! バッジ生成のコア
//!
//! プラグインURL → 識別子 → エンドポイントURL → スニペット の一方向パイプライン。
//! すべて副作用のない純粋関数で構成する。

mod builder;
mod endpoint;
mod identifier;
mod snippet;

pub use builder::{BadgeBuilder, Snippet};
pub use endpoint::{build_badge_urls, BadgeMetric, BadgeService, BadgeUrls};
pub use identifier::{extract_identifier, resolve_source, ResolvedSource, DEFAULT_PLUGIN_URL};
pub use snippet::{format_snippet, BadgeImageService, OutputFormat};

#[cfg(test)]
#[path = "badge/proptests.rs"]
mod proptests;
