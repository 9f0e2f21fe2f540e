//! Layout definitions for the TUI
//!
//! One column: title, bracket list, amount field, result card, key hints.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the calculator column grows
pub const MAX_WIDTH: u16 = 60;

/// Layout regions for the calculator screen
pub struct ScreenLayout {
    /// Title line
    pub title: Rect,
    /// Bordered bracket list
    pub brackets: Rect,
    /// Amount field
    pub amount: Rect,
    /// Result card
    pub result: Rect,
    /// Key hints at the bottom
    pub status_bar: Rect,
}

impl ScreenLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let column = centered_column(MAX_WIDTH, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Spacer
                Constraint::Length(7), // Brackets (5 rows + border)
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Amount field
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Result card
                Constraint::Min(0),    // Filler
                Constraint::Length(1), // Status bar
            ])
            .split(column);

        Self {
            title: chunks[0],
            brackets: chunks[2],
            amount: chunks[4],
            result: chunks[6],
            status_bar: chunks[8],
        }
    }
}

/// Full-height column of at most `width`, centered horizontally
pub fn centered_column(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let x = r.x + (r.width - width) / 2;
    Rect::new(x, r.y, width, r.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_column() {
        let area = Rect::new(0, 0, 100, 30);
        assert_eq!(centered_column(60, area), Rect::new(20, 0, 60, 30));

        let narrow = Rect::new(0, 0, 40, 30);
        assert_eq!(centered_column(60, narrow), Rect::new(0, 0, 40, 30));
    }

    #[test]
    fn test_regions_stack_in_order() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.title.y, 0);
        assert_eq!(layout.brackets.height, 7);
        assert!(layout.amount.y > layout.brackets.y);
        assert!(layout.result.y > layout.amount.y);
        assert_eq!(layout.status_bar.y, 29);
    }
}
