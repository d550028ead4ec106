//! 設定画面の描画
//!
//! 三つのリストを横に並べ、下にステータスラインとヘルプ行を置く

use super::config_panel::ConfigPanel;
use crate::config::ListKind;
use crate::error::ErrorLevel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 選択行の印
const MARK_SELECTED: &str = "[x] ";
const MARK_UNSELECTED: &str = "[ ] ";

/// 設定画面レンダラー
#[derive(Debug, Clone)]
pub struct PanelRenderer {
    help: String,
}

impl PanelRenderer {
    pub fn new(help: impl Into<String>) -> Self {
        Self { help: help.into() }
    }

    pub fn draw(&self, frame: &mut Frame<'_>, panel: &ConfigPanel) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(rows[0]);

        for kind in ListKind::ALL {
            self.draw_pane(frame, columns[kind.index()], panel, kind);
        }

        frame.render_widget(status_line(panel), rows[1]);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                self.help.as_str(),
                Style::default().fg(Color::DarkGray),
            ))),
            rows[2],
        );
    }

    fn draw_pane(&self, frame: &mut Frame<'_>, area: Rect, panel: &ConfigPanel, kind: ListKind) {
        let pane = panel.pane(kind);
        let entries = panel.rows(kind);
        let focused = panel.focus() == kind;

        // 枠線と印の分を差し引いた幅
        let text_width = (area.width as usize).saturating_sub(2 + MARK_SELECTED.width());
        let items: Vec<ListItem<'_>> = entries
            .iter()
            .enumerate()
            .map(|(row, id)| {
                let mark = if pane.is_selected(row) { MARK_SELECTED } else { MARK_UNSELECTED };
                ListItem::new(format!("{}{}", mark, fit_to_width(id.as_str(), text_width)))
            })
            .collect();

        let title = format!(" {} ({}) ", kind.title(), entries.len());
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(title),
            )
            .highlight_style(if focused {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            });

        let mut state = ListState::default();
        if !entries.is_empty() {
            state.select(Some(pane.cursor()));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }
}

fn status_line(panel: &ConfigPanel) -> Paragraph<'static> {
    let Some(status) = panel.status() else {
        return Paragraph::new("");
    };

    let color = match status.level {
        ErrorLevel::Info => Color::Green,
        ErrorLevel::Warning => Color::Yellow,
        ErrorLevel::Error | ErrorLevel::Fatal => Color::Red,
    };
    Paragraph::new(Line::from(Span::styled(
        status.message.clone(),
        Style::default().fg(color),
    )))
}

/// 表示幅に収まるよう切り詰める（全角文字を考慮）
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + 1 > width {
            break;
        }
        result.push(ch);
        used += ch_width;
    }
    result.push('…');
    result
}
