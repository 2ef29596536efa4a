use crate::cli::{Cli, Command};
use figma_plugin_badges::badge::{resolve_source, ResolvedSource};
use figma_plugin_badges::config::Config;

pub mod id;
pub mod preview;
pub mod snippet;
pub mod ui;
pub mod urls;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    let config = Config::load(cli.config.as_deref()).map_err(|e| e.to_string())?;

    match cli.command {
        Command::Id(args) => id::run(args, &config).await,
        Command::Urls(args) => urls::run(args, &config).await,
        Command::Snippet(args) => snippet::run(args, &config).await,
        Command::Preview(args) => preview::run(args, &config).await,
        Command::Ui(args) => ui::run(args, &config).await,
    }
}

/// 引数のURL（省略時は空入力）を解決
fn resolve(url: Option<&str>, config: &Config) -> ResolvedSource {
    resolve_source(url.unwrap_or_default(), &config.default_plugin_url)
}
