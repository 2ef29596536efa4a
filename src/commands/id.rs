//! fpb id コマンド
//!
//! プラグインURLから識別子だけを取り出して表示する。

use super::resolve;
use figma_plugin_badges::config::Config;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// プラグインのコミュニティURL（省略時はデフォルトURL）
    pub url: Option<String>,
}

pub async fn run(args: Args, config: &Config) -> Result<(), String> {
    let source = resolve(args.url.as_deref(), config);

    // 識別子が空なら何も出力しない
    if source.has_identifier() {
        println!("{}", source.identifier);
    }

    Ok(())
}
