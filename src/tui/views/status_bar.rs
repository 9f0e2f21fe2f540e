//! Status bar view
//!
//! Key hints for the screen

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::strings::{self, StringKey};

/// Render the status bar
pub fn render(frame: &mut Frame, area: Rect) {
    let hints = strings::lookup(StringKey::KeyHints);
    let line = Line::from(vec![Span::styled(hints, Style::default().fg(Color::DarkGray))]);

    frame.render_widget(Paragraph::new(line), area);
}
