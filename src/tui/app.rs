//! Application state for the TUI
//!
//! The App wraps the calculator state with the bits only a terminal needs:
//! which control has focus and where the cursor sits in the amount field.

use crate::locale::Locale;
use crate::screen::{self, CalculatorState, ScreenModel};
use crate::strings::{self, StringKey};

use super::widgets::TextInput;

/// Which control currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The bracket list; keys move the selection
    #[default]
    Brackets,
    /// The amount field; keys edit the text
    Amount,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct App {
    /// Calculator state: the only thing the result depends on
    pub state: CalculatorState,

    /// Editing buffer for the amount field
    amount_field: TextInput,

    /// Which control has focus
    pub focus: Focus,

    /// Locale used to format the result
    pub locale: Locale,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(locale: Locale) -> Self {
        let amount_field = TextInput::new()
            .label(strings::lookup(StringKey::InputLabel))
            .placeholder(strings::lookup(StringKey::InputPlaceholder));

        Self {
            state: CalculatorState::new(),
            amount_field,
            focus: Focus::default(),
            locale,
            should_quit: false,
        }
    }

    /// Describe the screen for the current state
    pub fn screen(&self) -> ScreenModel {
        screen::render(&self.state, &self.locale)
    }

    /// The amount field, focused when the amount has focus
    pub fn amount_field(&self) -> TextInput {
        self.amount_field
            .clone()
            .focused(self.focus == Focus::Amount)
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Move focus into the amount field
    pub fn focus_amount(&mut self) {
        self.focus = Focus::Amount;
    }

    /// Leave the amount field ("done")
    pub fn clear_focus(&mut self) {
        self.focus = Focus::Brackets;
    }

    /// Toggle focus between the two controls
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Brackets => Focus::Amount,
            Focus::Amount => Focus::Brackets,
        };
    }

    /// Apply an edit to the amount field and store the new text
    pub fn edit_amount<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut TextInput),
    {
        edit(&mut self.amount_field);
        self.state.set_amount_input(self.amount_field.value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaxBracket;

    fn app() -> App {
        App::new(Locale::parse("en_US").unwrap())
    }

    #[test]
    fn test_new_app() {
        let app = app();
        assert_eq!(app.focus, Focus::Brackets);
        assert_eq!(app.state.bracket(), TaxBracket::UpTo18200);
        assert!(!app.should_quit);
        assert!(!app.amount_field().focused);
    }

    #[test]
    fn test_edit_amount_syncs_state() {
        let mut app = app();
        app.edit_amount(|field| {
            field.insert('9');
            field.insert('0');
        });
        assert_eq!(app.state.amount_input(), "90");
        assert_eq!(app.screen().result, "Reduced Cost: $90.00");
    }

    #[test]
    fn test_focus_changes() {
        let mut app = app();
        app.focus_amount();
        assert!(app.amount_field().focused);
        app.clear_focus();
        assert_eq!(app.focus, Focus::Brackets);
        app.toggle_focus();
        assert_eq!(app.focus, Focus::Amount);
    }
}
