//! バッジ生成 TUI の描画処理

use super::app::Model;
use super::highlight::highlight;
use crate::badge::{OutputFormat, Snippet};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};

/// UI をレンダリング
pub(super) fn draw(f: &mut Frame, model: &Model) {
    // 背景をクリア
    f.render_widget(Clear, f.area());

    let snippets = model.snippets();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // ヘッダ
            Constraint::Length(3), // 入力欄
            Constraint::Min(1),    // プレビュー + コード
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_input(f, model, chunks[1]);

    if snippets.is_empty() {
        // 識別子が得られない間は何も表示しない
        let hint = Paragraph::new("Enter a plugin url")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, chunks[2]);
    } else {
        render_badges(f, model.format, &snippets, chunks[2]);
    }

    let help = Paragraph::new(" Tab: HTML/Markdown · Ctrl+U: clear · Esc: quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from("Figma Plugin Badges".bold()),
        Line::from("Display install and like counts of your Figma plugin".dark_gray()),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn render_input(f: &mut Frame, model: &Model, area: Rect) {
    let block = Block::default()
        .title("Figma Plugin Url")
        .borders(Borders::ALL);

    let text = if model.input.is_empty() {
        Span::styled(model.placeholder(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(model.input.as_str())
    };
    f.render_widget(Paragraph::new(text).block(block), area);

    // カーソルを入力末尾に置く
    let cursor_x = area.x + 1 + model.input.chars().count() as u16;
    f.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
}

fn render_badges(f: &mut Frame, format: OutputFormat, snippets: &[Snippet], area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(snippets.len() as u16 + 2), // プレビュー
            Constraint::Length(1),                         // 形式タブ
            Constraint::Min(1),                            // コード
        ])
        .split(area);

    // バッジプレビュー（画像URL）
    let preview: Vec<Line> = snippets
        .iter()
        .map(|s| {
            Line::from(vec![
                Span::styled(format!("{:<9}", s.metric.display_name()), Style::default().bold()),
                Span::styled(s.image_url.as_str(), Style::default().fg(Color::Cyan)),
            ])
        })
        .collect();
    let preview = Paragraph::new(preview)
        .block(Block::default().title("Badge Preview").borders(Borders::ALL));
    f.render_widget(preview, chunks[0]);

    // 出力形式の切替
    let titles: Vec<&str> = OutputFormat::all().iter().map(|o| o.display_name()).collect();
    let selected = OutputFormat::all()
        .iter()
        .position(|o| *o == format)
        .unwrap_or_default();
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");
    f.render_widget(tabs, chunks[1]);

    // 指標ごとのコード
    let code_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            snippets
                .iter()
                .map(|_| Constraint::Ratio(1, snippets.len() as u32))
                .collect::<Vec<_>>(),
        )
        .split(chunks[2]);

    for (snippet, area) in snippets.iter().zip(code_chunks.iter()) {
        let code = Paragraph::new(highlight(format, &snippet.code))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(snippet.metric.display_name())
                    .borders(Borders::ALL),
            );
        f.render_widget(code, *area);
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
