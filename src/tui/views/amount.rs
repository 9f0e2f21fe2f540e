//! Amount field view

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::tui::app::{App, Focus};

/// Render the amount text field
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.focus == Focus::Amount {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    frame.render_widget(block, area);
    frame.render_widget(app.amount_field(), inner);
}
