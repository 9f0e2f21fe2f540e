//! Bracket table formatting

use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::calculator;
use crate::locale::Locale;
use crate::models::TaxBracket;
use crate::strings::{self, StringKey};

/// Row for the bracket table output
#[derive(Debug, Clone, Tabled)]
struct BracketRow {
    #[tabled(rename = "#")]
    position: usize,

    #[tabled(rename = "Identifier")]
    identifier: &'static str,

    #[tabled(rename = "Bracket")]
    label: &'static str,

    #[tabled(rename = "Rate")]
    rate: String,

    #[tabled(rename = "Adjusted Cost")]
    adjusted: String,
}

/// Format a rate fraction as a percentage ("32.5%")
pub fn format_rate(rate: f64) -> String {
    let percent = format!("{:.1}", rate * 100.0);
    let trimmed = percent.strip_suffix(".0").unwrap_or(&percent);
    format!("{}%", trimmed)
}

/// Format every bracket with its rate and the adjusted cost of `raw_amount`
pub fn format_bracket_table(raw_amount: &str, locale: &Locale) -> String {
    let rows: Vec<BracketRow> = TaxBracket::ALL
        .iter()
        .enumerate()
        .map(|(i, bracket)| BracketRow {
            position: i + 1,
            identifier: bracket.identifier(),
            label: strings::lookup(StringKey::Bracket(*bracket)),
            rate: format_rate(bracket.rate()),
            adjusted: calculator::calculate(raw_amount, *bracket, locale),
        })
        .collect();

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(3..)).with(Alignment::right()))
        .to_string()
}
