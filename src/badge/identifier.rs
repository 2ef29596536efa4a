//! プラグイン識別子の抽出
//!
//! コミュニティページURL `/community/plugin/<id>/<slug>` のパスから `<id>` を取り出す。

use url::Url;

/// 入力が空のときに使うデフォルトのプラグインURL
pub const DEFAULT_PLUGIN_URL: &str =
    "https://www.figma.com/community/plugin/854152902511629627/Vector-Logos";

/// パスを `/` で分割したときの識別子の位置（先頭の空セグメントを含む）
const IDENTIFIER_SEGMENT: usize = 3;

/// 解決済みのプラグインソース
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    /// 実際に解析したURL（入力が空ならフォールバック）
    pub url: String,
    /// プラグイン識別子（抽出できなければ空文字列）
    pub identifier: String,
}

impl ResolvedSource {
    /// 識別子が得られたかどうか
    pub fn has_identifier(&self) -> bool {
        !self.identifier.is_empty()
    }
}

/// URL文字列からプラグイン識別子を抽出
///
/// `raw_url` が空なら `fallback_url` を使う。
/// パースに失敗した場合やセグメントが足りない場合は空文字列を返す。
pub fn extract_identifier(raw_url: &str, fallback_url: &str) -> String {
    let source = if raw_url.is_empty() {
        fallback_url
    } else {
        raw_url
    };

    identifier_from(source)
}

/// 入力を解決し、実効URLと識別子の組を返す
///
/// フォールバックは入力が空のときだけ。空白のみの入力は空の識別子になる。
/// 空でない入力は前後の空白を取り除く（貼り付け時の改行対策）。
pub fn resolve_source(raw_url: &str, fallback_url: &str) -> ResolvedSource {
    let url = if raw_url.is_empty() {
        fallback_url
    } else {
        raw_url.trim()
    };

    ResolvedSource {
        url: url.to_string(),
        identifier: identifier_from(url),
    }
}

fn identifier_from(source: &str) -> String {
    match Url::parse(source) {
        Ok(url) => url
            .path()
            .split('/')
            .nth(IDENTIFIER_SEGMENT)
            .unwrap_or_default()
            .to_string(),
        Err(e) => {
            tracing::debug!(input = source, error = %e, "failed to parse plugin url");
            String::new()
        }
    }
}

#[cfg(test)]
#[path = "identifier_test.rs"]
mod tests;
