//! スニペットのシンタックスハイライト
//!
//! syntect の同梱シンタックス（HTML / Markdown）で1行を色付けする。

use crate::badge::OutputFormat;
use ratatui::prelude::*;
use std::sync::LazyLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME: LazyLock<Option<Theme>> = LazyLock::new(|| {
    let themes = ThemeSet::load_defaults();
    themes
        .themes
        .get("base16-ocean.dark")
        .cloned()
        .or_else(|| themes.themes.values().next().cloned())
});

/// シンタックス名
fn syntax_token(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Html => "html",
        OutputFormat::Markdown => "md",
    }
}

/// スニペットを色付きの行に変換
///
/// ハイライトできない場合は無装飾の1スパンを返す。
pub(super) fn highlight(format: OutputFormat, code: &str) -> Line<'static> {
    let plain = || Line::from(code.to_string());

    let Some(theme) = THEME.as_ref() else {
        return plain();
    };
    let Some(syntax) = SYNTAX_SET.find_syntax_by_token(syntax_token(format)) else {
        return plain();
    };

    let mut highlighter = HighlightLines::new(syntax, theme);
    let line = format!("{code}\n");
    let Ok(tokens) = highlighter.highlight_line(&line, &SYNTAX_SET) else {
        return plain();
    };

    let spans: Vec<Span<'static>> = tokens
        .into_iter()
        .map(|(style, segment)| (style, segment.trim_end_matches('\n')))
        .filter(|(_, segment)| !segment.is_empty())
        .map(|(style, segment)| Span::styled(segment.to_string(), syntect_to_ratatui(style)))
        .collect();

    if spans.is_empty() {
        plain()
    } else {
        Line::from(spans)
    }
}

/// 前景色と文字装飾のみ反映（背景は端末に任せる）
fn syntect_to_ratatui(style: syntect::highlighting::Style) -> Style {
    let mut rat_style = Style::default().fg(Color::Rgb(
        style.foreground.r,
        style.foreground.g,
        style.foreground.b,
    ));

    if style.font_style.contains(FontStyle::BOLD) {
        rat_style = rat_style.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        rat_style = rat_style.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        rat_style = rat_style.add_modifier(Modifier::UNDERLINED);
    }

    rat_style
}

#[cfg(test)]
#[path = "highlight_test.rs"]
mod tests;
