//! Tax-adjusted cost calculation
//!
//! Pure functions: parse the raw amount text, take the bracket's rate off
//! it, and format the result for the active locale.

use crate::locale::Locale;
use crate::models::TaxBracket;

/// Parse raw amount text, substituting zero for anything unusable
///
/// Surrounding whitespace is ignored. Empty or non-numeric input yields `0.0`.
/// So do `NaN`, `inf` and `Infinity`: they parse as floats, but count as
/// unparsable here, so the result never shows a non-finite amount.
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => amount,
        _ => {
            if !raw.is_empty() {
                tracing::debug!(input = raw, "unparsable amount, using zero");
            }
            0.0
        }
    }
}

/// Amount left after removing `rate` of it
pub fn adjusted_cost(amount: f64, rate: f64) -> f64 {
    amount - amount * rate
}

/// Parse `raw`, apply `bracket`'s rate and format the result in `locale`
pub fn calculate(raw: &str, bracket: TaxBracket, locale: &Locale) -> String {
    calculate_with_rate(raw, bracket.rate(), locale)
}

/// Same as [`calculate`] but with an explicit rate
pub fn calculate_with_rate(raw: &str, rate: f64, locale: &Locale) -> String {
    locale.format_currency(adjusted_cost(parse_amount(raw), rate))
}
