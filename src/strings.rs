//! Display string table
//!
//! Every piece of user-facing text on the screen is looked up by key here,
//! so presentation wording stays out of the models.

use crate::models::TaxBracket;

/// Placeholder substituted by [`format_template`]
pub const PLACEHOLDER: &str = "%s";

/// Keys for user-facing strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    CalculateCost,
    IncomeBracket,
    Bracket(TaxBracket),
    InputLabel,
    InputPlaceholder,
    ReducedCost,
    KeyHints,
}

/// Resolve a key to its display text
pub fn lookup(key: StringKey) -> &'static str {
    match key {
        StringKey::CalculateCost => "Calculate Cost",
        StringKey::IncomeBracket => "Income Bracket",
        StringKey::Bracket(bracket) => bracket_label(bracket),
        StringKey::InputLabel => "Cost Amount",
        StringKey::InputPlaceholder => "0.00",
        StringKey::ReducedCost => "Reduced Cost: %s",
        StringKey::KeyHints => {
            " ↑/↓ or 1-5: Bracket  Tab: Switch  Enter: Done  Esc: Quit "
        }
    }
}

fn bracket_label(bracket: TaxBracket) -> &'static str {
    match bracket {
        TaxBracket::UpTo18200 => "Up to $18,200",
        TaxBracket::UpTo45000 => "$18,201 – $45,000",
        TaxBracket::UpTo120000 => "$45,001 – $120,000",
        TaxBracket::UpTo180000 => "$120,001 – $180,000",
        TaxBracket::Over180000 => "Over $180,000",
    }
}

/// Substitute the first placeholder in `key`'s text with `value`
pub fn format_template(key: StringKey, value: &str) -> String {
    lookup(key).replacen(PLACEHOLDER, value, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bracket_has_a_distinct_label() {
        let labels: Vec<&str> = TaxBracket::ALL
            .iter()
            .map(|b| lookup(StringKey::Bracket(*b)))
            .collect();
        for (i, label) in labels.iter().enumerate() {
            assert!(!label.is_empty());
            assert!(!labels[i + 1..].contains(label));
        }
    }

    #[test]
    fn test_template_has_one_placeholder() {
        assert_eq!(lookup(StringKey::ReducedCost).matches(PLACEHOLDER).count(), 1);
    }

    #[test]
    fn test_format_template() {
        assert_eq!(
            format_template(StringKey::ReducedCost, "$81.00"),
            "Reduced Cost: $81.00"
        );
    }
}
