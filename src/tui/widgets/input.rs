//! Text input widget
//!
//! A single-line text field with a cursor. The cursor counts characters,
//! not bytes, so non-ASCII input is safe to edit. Text longer than the
//! field scrolls horizontally to keep the cursor in view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position, in characters
    cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor);
        self.content.insert(offset, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Cursor position, in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// First visible character when the cursor must fit in `width` cells
fn scroll_offset(cursor: usize, width: usize) -> usize {
    if width == 0 || cursor < width {
        0
    } else {
        cursor + 1 - width
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            u16::try_from(self.label.chars().count() + 2).unwrap_or(u16::MAX)
        };

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(&self.label, Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width.min(area.width));
        }

        let field_width = area.width.saturating_sub(label_width);
        if field_width == 0 {
            return;
        }
        let input_start = area.x + label_width;

        let show_placeholder = self.content.is_empty() && !self.focused;
        let offset = if self.focused {
            scroll_offset(self.cursor, usize::from(field_width))
        } else {
            0
        };

        let (display_text, text_style) = if show_placeholder {
            (self.placeholder.clone(), Style::default().fg(Color::DarkGray))
        } else {
            let visible: String = self.content.chars().skip(offset).collect();
            let color = if self.focused { Color::White } else { Color::Yellow };
            (visible, Style::default().fg(color))
        };

        buf.set_stringn(
            input_start,
            area.y,
            &display_text,
            usize::from(field_width),
            text_style,
        );

        if self.focused {
            let column = u16::try_from(self.cursor - offset).unwrap_or(u16::MAX);
            let cursor_x = input_start.saturating_add(column);
            if cursor_x < area.right() {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or('_');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}
