//! TUI (Terminal User Interface) コンポーネント
//!
//! ratatui/crossterm を使用したバッジ生成画面を提供する。
//!
//! ## モジュール構成
//!
//! - `app`: 状態（Model）、メッセージ（Msg）、更新処理
//! - `highlight`: スニペットのシンタックスハイライト
//! - `render`: 画面描画

mod app;
mod highlight;
mod render;

use crate::config::Config;
use crate::error::{BadgeError, Result};
use app::Model;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout};

/// TUI を実行
pub fn run(config: &Config, initial_input: String) -> Result<()> {
    let mut model = Model::new(config, initial_input);

    // ターミナル設定
    terminal::enable_raw_mode().map_err(tui_error)?;
    stdout().execute(EnterAlternateScreen).map_err(tui_error)?;

    let result = event_loop(&mut model);

    // ターミナルを復元（ループのエラーより先に行う）
    terminal::disable_raw_mode().map_err(tui_error)?;
    stdout().execute(LeaveAlternateScreen).map_err(tui_error)?;

    result.map_err(tui_error)
}

fn event_loop(model: &mut Model) -> io::Result<()> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // メインループ
    while !model.should_quit {
        terminal.draw(|f| render::draw(f, model))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(msg) = app::key_to_msg(key) {
                    app::update(model, msg);
                }
            }
        }
    }

    Ok(())
}

fn tui_error(e: io::Error) -> BadgeError {
    BadgeError::Tui(e.to_string())
}
