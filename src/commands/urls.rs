//! fpb urls コマンド
//!
//! installs / likes のバッジエンドポイントURLを表示する。

use super::resolve;
use figma_plugin_badges::badge::BadgeUrls;
use figma_plugin_badges::config::Config;
use figma_plugin_badges::output::urls_table;
use clap::{Parser, ValueEnum};
use serde::Serialize;

/// 出力形式
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(
    after_help = "OUTPUT FORMATS:\n  table  Human-readable table (default)\n  json   {\"identifier\", \"installs\", \"likes\"}\n  yaml   Same fields as json"
)]
pub struct Args {
    /// プラグインのコミュニティURL（省略時はデフォルトURL）
    pub url: Option<String>,

    /// 出力形式
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// 機械向け出力の構造
#[derive(Debug, Serialize)]
struct UrlsOutput<'a> {
    identifier: &'a str,
    #[serde(flatten)]
    urls: &'a BadgeUrls,
}

pub async fn run(args: Args, config: &Config) -> Result<(), String> {
    let source = resolve(args.url.as_deref(), config);

    if !source.has_identifier() {
        return Ok(());
    }

    let urls = config.badge_service.badge_urls(&source.identifier);
    let output = UrlsOutput {
        identifier: &source.identifier,
        urls: &urls,
    };

    match args.format {
        OutputFormat::Table => println!("{}", urls_table(&source.identifier, &urls)),
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Yaml => print_yaml(&output)?,
    }

    Ok(())
}

fn print_json(output: &UrlsOutput<'_>) -> Result<(), String> {
    serde_json::to_string_pretty(output)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize to JSON: {}", e))
}

fn print_yaml(output: &UrlsOutput<'_>) -> Result<(), String> {
    serde_yaml::to_string(output)
        .map(|yaml| print!("{yaml}"))
        .map_err(|e| format!("Failed to serialize to YAML: {}", e))
}
