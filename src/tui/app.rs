//! バッジ生成 TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: 入力テキストと出力形式の2つだけを状態として持つ
//! - `Msg`: キー入力から変換されたメッセージ
//! - `update`: Msg を Model に適用
//!
//! 識別子・URL・スニペットは毎回 Model から導出し、保持しない。

use crate::badge::{resolve_source, BadgeBuilder, OutputFormat, ResolvedSource, Snippet};
use crate::config::Config;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// アプリケーションの状態
#[derive(Debug, Clone)]
pub struct Model {
    /// 入力中のプラグインURL
    pub input: String,
    /// 選択中の出力形式
    pub format: OutputFormat,
    /// 終了フラグ
    pub should_quit: bool,
    fallback_url: String,
    builder: BadgeBuilder,
}

impl Model {
    pub fn new(config: &Config, input: String) -> Self {
        Self {
            input,
            format: config.default_format,
            should_quit: false,
            fallback_url: config.default_plugin_url.clone(),
            builder: config.builder(),
        }
    }

    /// 入力欄のプレースホルダ
    pub fn placeholder(&self) -> &str {
        &self.fallback_url
    }

    /// 現在の入力を解決
    pub fn source(&self) -> ResolvedSource {
        resolve_source(&self.input, &self.fallback_url)
    }

    /// 現在の入力と形式から生成したスニペット（識別子が空なら空）
    pub fn snippets(&self) -> Vec<Snippet> {
        self.builder.snippets(&self.source(), self.format)
    }
}

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 終了
    Quit,
    /// 文字入力
    Input(char),
    /// 文字削除
    Backspace,
    /// 入力クリア
    Clear,
    /// HTML / Markdown 切替
    ToggleFormat,
}

/// キー入力をメッセージに変換
pub fn key_to_msg(key: KeyEvent) -> Option<Msg> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => Some(Msg::Quit),
        KeyCode::Char('c') if ctrl => Some(Msg::Quit),
        KeyCode::Char('u') if ctrl => Some(Msg::Clear),
        KeyCode::Tab | KeyCode::BackTab => Some(Msg::ToggleFormat),
        KeyCode::Backspace => Some(Msg::Backspace),
        KeyCode::Char(c) if !ctrl => Some(Msg::Input(c)),
        _ => None,
    }
}

/// メッセージを適用
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => model.should_quit = true,
        Msg::Input(c) => model.input.push(c),
        Msg::Backspace => {
            model.input.pop();
        }
        Msg::Clear => model.input.clear(),
        Msg::ToggleFormat => model.format = model.format.toggle(),
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
