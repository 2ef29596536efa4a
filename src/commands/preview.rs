//! fpb preview コマンド
//!
//! バッジデータサービスから現在値を取得し、端末にバッジとして描画する。

use super::resolve;
use figma_plugin_badges::config::Config;
use figma_plugin_badges::http::fetch_all;
use figma_plugin_badges::output::{render_badge, render_failure};
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// プラグインのコミュニティURL（省略時はデフォルトURL）
    pub url: Option<String>,
}

pub async fn run(args: Args, config: &Config) -> Result<(), String> {
    let source = resolve(args.url.as_deref(), config);

    let Some(urls) = config.builder().urls(&source) else {
        return Ok(());
    };

    let client = config.http.build_client();
    let results = fetch_all(&client, &urls).await;

    // 取得失敗は行内に表示するだけで、終了コードには反映しない
    for (metric, result) in results {
        match result {
            Ok(data) => println!("{}", render_badge(&data)),
            Err(e) => {
                tracing::warn!(%metric, error = %e, retryable = e.is_retryable(), "badge fetch failed");
                println!("{}", render_failure(metric, &e.to_string()));
            }
        }
    }

    Ok(())
}
