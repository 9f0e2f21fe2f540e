//! Calculator state and its screen description
//!
//! [`CalculatorState`] is the whole of the application's state: the selected
//! bracket and the raw amount text. [`render`] turns it into a
//! [`ScreenModel`], a plain description of what the screen shows. The TUI
//! calls `render` after every mutation and draws the result; nothing here
//! knows about terminals.

use crate::calculator;
use crate::locale::Locale;
use crate::models::TaxBracket;
use crate::strings::{self, StringKey};

/// Selected bracket plus raw amount text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    bracket: TaxBracket,
    amount_input: String,
}

impl CalculatorState {
    /// Start with the lowest bracket and an empty amount
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected bracket
    pub fn bracket(&self) -> TaxBracket {
        self.bracket
    }

    /// Raw amount text, exactly as entered
    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    /// Replace the selected bracket
    pub fn select(&mut self, bracket: TaxBracket) {
        if bracket != self.bracket {
            tracing::debug!(from = %self.bracket, to = %bracket, "bracket selected");
        }
        self.bracket = bracket;
    }

    /// Select by position; out-of-range indexes leave the selection alone
    pub fn select_index(&mut self, index: usize) {
        if let Some(bracket) = TaxBracket::from_index(index) {
            self.select(bracket);
        }
    }

    /// Select the next bracket, wrapping around
    pub fn select_next(&mut self) {
        self.select(self.bracket.next());
    }

    /// Select the previous bracket, wrapping around
    pub fn select_previous(&mut self) {
        self.select(self.bracket.previous());
    }

    /// Store the amount text verbatim
    pub fn set_amount_input(&mut self, raw: impl Into<String>) {
        self.amount_input = raw.into();
    }
}

/// One row of the bracket selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketOption {
    pub bracket: TaxBracket,
    pub label: &'static str,
    pub selected: bool,
}

/// Everything the screen displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenModel {
    pub title: &'static str,
    pub bracket_heading: &'static str,
    pub options: Vec<BracketOption>,
    pub input_label: &'static str,
    pub input_placeholder: &'static str,
    pub input_value: String,
    pub result: String,
}

/// Describe the screen for `state`
pub fn render(state: &CalculatorState, locale: &Locale) -> ScreenModel {
    let options = TaxBracket::ALL
        .iter()
        .map(|bracket| BracketOption {
            bracket: *bracket,
            label: strings::lookup(StringKey::Bracket(*bracket)),
            selected: *bracket == state.bracket,
        })
        .collect();

    let cost = calculator::calculate(&state.amount_input, state.bracket, locale);

    ScreenModel {
        title: strings::lookup(StringKey::CalculateCost),
        bracket_heading: strings::lookup(StringKey::IncomeBracket),
        options,
        input_label: strings::lookup(StringKey::InputLabel),
        input_placeholder: strings::lookup(StringKey::InputPlaceholder),
        input_value: state.amount_input.clone(),
        result: strings::format_template(StringKey::ReducedCost, &cost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale() -> Locale {
        Locale::parse("en_US").unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = CalculatorState::new();
        assert_eq!(state.bracket(), TaxBracket::UpTo18200);
        assert_eq!(state.amount_input(), "");

        let screen = render(&state, &locale());
        assert_eq!(screen.result, "Reduced Cost: $0.00");
        assert_eq!(screen.options.len(), 5);
    }

    #[test]
    fn test_exactly_one_selected() {
        let mut state = CalculatorState::new();
        for index in 0..TaxBracket::ALL.len() {
            state.select_index(index);
            let screen = render(&state, &locale());
            assert_eq!(screen.options.iter().filter(|o| o.selected).count(), 1);
            let selected = screen.options.iter().find(|o| o.selected).map(|o| o.bracket);
            assert_eq!(selected, TaxBracket::from_index(index));
        }
    }

    #[test]
    fn test_select_index_out_of_range_is_ignored() {
        let mut state = CalculatorState::new();
        state.select(TaxBracket::UpTo120000);
        state.select_index(9);
        assert_eq!(state.bracket(), TaxBracket::UpTo120000);
    }

    #[test]
    fn test_switching_bracket_updates_result() {
        let mut state = CalculatorState::new();
        state.set_amount_input("1000");
        assert_eq!(render(&state, &locale()).result, "Reduced Cost: $1,000.00");

        state.select(TaxBracket::Over180000);
        assert_eq!(state.amount_input(), "1000");
        assert_eq!(render(&state, &locale()).result, "Reduced Cost: $550.00");

        state.select_previous();
        assert_eq!(render(&state, &locale()).result, "Reduced Cost: $630.00");
    }

    #[test]
    fn test_amount_stored_verbatim() {
        let mut state = CalculatorState::new();
        state.set_amount_input("  abc ");
        let screen = render(&state, &locale());
        assert_eq!(screen.input_value, "  abc ");
        assert_eq!(screen.result, "Reduced Cost: $0.00");
    }

    #[test]
    fn test_render_is_pure() {
        let mut state = CalculatorState::new();
        state.set_amount_input("100");
        state.select_next();
        let before = state.clone();
        let first = render(&state, &locale());
        let second = render(&state, &locale());
        assert_eq!(first, second);
        assert_eq!(state, before);
        assert_eq!(first.result, "Reduced Cost: $81.00");
    }
}
