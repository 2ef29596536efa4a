//! fpb snippet コマンド
//!
//! HTML / Markdown の埋め込みスニペットを1行ずつ出力する。

use super::resolve;
use figma_plugin_badges::badge::{BadgeMetric, OutputFormat, Snippet};
use figma_plugin_badges::config::Config;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    after_help = "OUTPUT:\n  One snippet per line, installs first then likes.\n  Nothing is printed when no plugin identifier can be extracted."
)]
pub struct Args {
    /// プラグインのコミュニティURL（省略時はデフォルトURL）
    pub url: Option<String>,

    /// 出力形式（省略時は設定ファイルの default_format）
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// 指定した指標のみ出力
    #[arg(long, short = 'm', value_enum)]
    pub metric: Option<BadgeMetric>,
}

pub async fn run(args: Args, config: &Config) -> Result<(), String> {
    let source = resolve(args.url.as_deref(), config);
    let format = args.format.unwrap_or(config.default_format);

    let snippets = config.builder().snippets(&source, format);
    for snippet in select(&snippets, args.metric) {
        println!("{}", snippet.code);
    }

    Ok(())
}

/// 指標で絞り込む
fn select(snippets: &[Snippet], metric: Option<BadgeMetric>) -> impl Iterator<Item = &Snippet> {
    snippets
        .iter()
        .filter(move |s| metric.map_or(true, |m| s.metric == m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figma_plugin_badges::badge::{resolve_source, BadgeBuilder, DEFAULT_PLUGIN_URL};

    fn default_snippets() -> Vec<Snippet> {
        let source = resolve_source("", DEFAULT_PLUGIN_URL);
        BadgeBuilder::default().snippets(&source, OutputFormat::Markdown)
    }

    #[test]
    fn test_select_all() {
        let snippets = default_snippets();
        assert_eq!(select(&snippets, None).count(), 2);
    }

    #[test]
    fn test_select_single_metric() {
        let snippets = default_snippets();
        let selected: Vec<_> = select(&snippets, Some(BadgeMetric::Likes)).collect();

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].metric, BadgeMetric::Likes);
    }
}
