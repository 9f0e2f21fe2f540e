//! Result card view

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::screen::ScreenModel;

/// Render the adjusted cost inside a bordered card
pub fn render(frame: &mut Frame, screen: &ScreenModel, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green));

    let paragraph = Paragraph::new(screen.result.as_str())
        .block(block)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(paragraph, area);
}
