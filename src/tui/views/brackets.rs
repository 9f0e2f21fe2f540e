//! Bracket selector view
//!
//! A radio-style list: every option is drawn, exactly one is marked.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::screen::ScreenModel;
use crate::tui::app::{App, Focus};

/// Render the bracket list
pub fn render(frame: &mut Frame, app: &App, screen: &ScreenModel, area: Rect) {
    let is_focused = app.focus == Focus::Brackets;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" {} ", screen.bracket_heading))
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let items: Vec<ListItem> = screen
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = if option.selected { "(•)" } else { "( )" };
            let style = if option.selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{} {}", marker, option.label), style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
