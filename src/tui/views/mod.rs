//! TUI Views module
//!
//! Draws a [`ScreenModel`](crate::screen::ScreenModel): the title, the
//! bracket list, the amount field, the result card and the status bar.

pub mod amount;
pub mod brackets;
pub mod result;
pub mod status_bar;

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use super::app::App;
use super::layout::ScreenLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let screen = app.screen();

    let title = Paragraph::new(screen.title)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, layout.title);

    brackets::render(frame, app, &screen, layout.brackets);
    amount::render(frame, app, layout.amount);
    result::render(frame, &screen, layout.result);
    status_bar::render(frame, layout.status_bar);
}
