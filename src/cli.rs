use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{id, preview, snippet, ui, urls};

#[derive(Debug, Parser)]
#[command(name = "fpb")]
#[command(about = "Figma Plugin Badges CLI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file (default: ~/.fpb/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// プラグインURLから識別子を抽出
    Id(id::Args),

    /// バッジエンドポイントURLを表示
    Urls(urls::Args),

    /// 埋め込みスニペットを生成
    Snippet(snippet::Args),

    /// バッジの現在値を取得して表示
    Preview(preview::Args),

    /// 対話型UIを起動
    Ui(ui::Args),
}
