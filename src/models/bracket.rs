//! Income tax brackets
//!
//! A closed set of five brackets, each carrying a flat rate. Display labels
//! live in [`crate::strings`]; this module only knows identifiers and rates.

use std::fmt;

/// Rate used when an identifier matches no known bracket
pub const FALLBACK_RATE: f64 = 0.45;

/// One of the five income brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaxBracket {
    /// Income up to 18,200
    #[default]
    UpTo18200,
    /// Income from 18,201 to 45,000
    UpTo45000,
    /// Income from 45,001 to 120,000
    UpTo120000,
    /// Income from 120,001 to 180,000
    UpTo180000,
    /// Income over 180,000
    Over180000,
}

impl TaxBracket {
    /// All brackets, lowest first
    pub const ALL: [TaxBracket; 5] = [
        TaxBracket::UpTo18200,
        TaxBracket::UpTo45000,
        TaxBracket::UpTo120000,
        TaxBracket::UpTo180000,
        TaxBracket::Over180000,
    ];

    /// The flat tax rate for this bracket, as a fraction
    pub const fn rate(&self) -> f64 {
        match self {
            Self::UpTo18200 => 0.0,
            Self::UpTo45000 => 0.19,
            Self::UpTo120000 => 0.325,
            Self::UpTo180000 => 0.37,
            Self::Over180000 => 0.45,
        }
    }

    /// Stable identifier, also used as the string-table key suffix
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::UpTo18200 => "bracket_18200",
            Self::UpTo45000 => "bracket_45000",
            Self::UpTo120000 => "bracket_120000",
            Self::UpTo180000 => "bracket_180000",
            Self::Over180000 => "bracket_highest",
        }
    }

    /// Position in [`TaxBracket::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|b| b == self)
            .unwrap_or_default()
    }

    /// Bracket at `index` in [`TaxBracket::ALL`], if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The next bracket up, wrapping to the lowest
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The next bracket down, wrapping to the highest
    pub fn previous(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Look up a bracket by identifier
    ///
    /// Accepts the full identifier (`bracket_45000`) or its short form
    /// (`45000`, `highest`). Matching is case-insensitive.
    pub fn from_identifier(id: &str) -> Option<Self> {
        let id = id.trim().to_ascii_lowercase();
        let short = id.strip_prefix("bracket_").unwrap_or(&id);
        match short {
            "18200" => Some(Self::UpTo18200),
            "45000" => Some(Self::UpTo45000),
            "120000" => Some(Self::UpTo120000),
            "180000" => Some(Self::UpTo180000),
            "highest" => Some(Self::Over180000),
            _ => None,
        }
    }
}

impl fmt::Display for TaxBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// Rate for a bracket identifier
///
/// Identifiers that match no bracket get [`FALLBACK_RATE`], the highest rate.
pub fn rate_for_identifier(id: &str) -> f64 {
    match TaxBracket::from_identifier(id) {
        Some(bracket) => bracket.rate(),
        None => {
            tracing::warn!(
                identifier = id,
                rate = FALLBACK_RATE,
                "unknown bracket, using highest rate"
            );
            FALLBACK_RATE
        }
    }
}
