//! fpb ui コマンド
//!
//! 対話型UIでURL入力と出力形式の切替を行う。

use clap::Parser;
use figma_plugin_badges::config::Config;
use figma_plugin_badges::tui;

#[derive(Debug, Parser)]
#[command(
    after_help = "KEYS:\n  type      Edit the plugin URL\n  Tab       Toggle HTML / Markdown\n  Ctrl+U    Clear the input\n  Esc       Quit"
)]
pub struct Args {
    /// 入力欄の初期値
    pub url: Option<String>,
}

pub async fn run(args: Args, config: &Config) -> Result<(), String> {
    tui::run(config, args.url.unwrap_or_default()).map_err(|e| e.to_string())
}
