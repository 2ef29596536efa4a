//! 端末出力のヘルパー

use crate::badge::{BadgeMetric, BadgeUrls};
use crate::http::BadgeData;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::{AnsiColors, OwoColorize};

/// shields.io の色名を端末色に変換
fn badge_color(name: Option<&str>, is_error: bool) -> AnsiColors {
    if is_error {
        return AnsiColors::Red;
    }

    match name.map(str::to_ascii_lowercase).as_deref() {
        Some("brightgreen") | Some("success") => AnsiColors::BrightGreen,
        Some("green") => AnsiColors::Green,
        Some("yellowgreen") | Some("yellow") => AnsiColors::Yellow,
        Some("orange") | Some("important") => AnsiColors::BrightYellow,
        Some("red") | Some("critical") => AnsiColors::Red,
        Some("lightgrey") | Some("lightgray") | Some("inactive") => AnsiColors::White,
        Some("grey") | Some("gray") => AnsiColors::BrightBlack,
        Some("blue") | Some("informational") => AnsiColors::Blue,
        // shields.io のデフォルト色
        _ => AnsiColors::BrightBlack,
    }
}

/// バッジを端末向けに描画（ラベル部 + 値部）
pub fn render_badge(data: &BadgeData) -> String {
    let color = badge_color(data.color.as_deref(), data.is_error);
    format!(
        "{}{}",
        format!(" {} ", data.label).white().on_bright_black(),
        format!(" {} ", data.message).black().on_color(color)
    )
}

/// 取得に失敗したバッジの表示
pub fn render_failure(metric: BadgeMetric, message: &str) -> String {
    format!("{} {}: {}", "✗".red(), metric, message)
}

/// エンドポイントURLの一覧表
pub fn urls_table(identifier: &str, urls: &BadgeUrls) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Metric", "Endpoint"]);

    table.add_row(vec!["Identifier", identifier]);
    for (metric, url) in urls.iter() {
        table.add_row(vec![metric.display_name(), url]);
    }

    table
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
