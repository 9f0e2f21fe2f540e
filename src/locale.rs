//! Locale-aware currency formatting
//!
//! Resolves the host locale from the usual POSIX environment variables and
//! formats amounts with that locale's currency conventions (symbol and its
//! placement, decimal and grouping separators, fraction digits).
//!
//! ## Resolution order
//!
//! 1. An explicit override (`--locale` or `locale` in config.json)
//! 2. `LC_ALL`, then `LC_MONETARY`, then `LANG` (first non-empty, not `C`/`POSIX`)
//! 3. `en_US`

use std::fmt;

use crate::error::{TaxCostError, TaxCostResult};

/// Environment variables consulted, in priority order
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

/// Currency conventions for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Currency symbol
    pub symbol: &'static str,
    /// Whether the symbol precedes the number
    pub symbol_first: bool,
    /// Separator between symbol and number, if any
    pub symbol_gap: Option<char>,
    /// Decimal separator
    pub decimal_separator: char,
    /// Thousands separator
    pub group_separator: char,
    /// Digits after the decimal separator
    pub fraction_digits: usize,
}

impl CurrencyFormat {
    const fn prefix(symbol: &'static str, gap: Option<char>, decimal: char, group: char) -> Self {
        Self {
            symbol,
            symbol_first: true,
            symbol_gap: gap,
            decimal_separator: decimal,
            group_separator: group,
            fraction_digits: 2,
        }
    }

    const fn suffix(symbol: &'static str, decimal: char, group: char) -> Self {
        Self {
            symbol,
            symbol_first: false,
            symbol_gap: Some(NBSP),
            decimal_separator: decimal,
            group_separator: group,
            fraction_digits: 2,
        }
    }
}

const DOLLAR: CurrencyFormat = CurrencyFormat::prefix("$", None, '.', ',');
const EURO_SUFFIX: CurrencyFormat = CurrencyFormat::suffix("€", ',', '.');

/// Known locales, keyed by normalized `language_REGION` tag
static KNOWN_LOCALES: &[(&str, CurrencyFormat)] = &[
    ("en_US", DOLLAR),
    ("en_AU", DOLLAR),
    ("en_CA", DOLLAR),
    ("en_NZ", DOLLAR),
    ("en_GB", CurrencyFormat::prefix("£", None, '.', ',')),
    ("en_IE", CurrencyFormat::prefix("€", None, '.', ',')),
    ("de_DE", EURO_SUFFIX),
    ("de_CH", CurrencyFormat::prefix("CHF", Some(NBSP), '.', '’')),
    ("fr_FR", CurrencyFormat::suffix("€", ',', NARROW_NBSP)),
    ("fr_CA", CurrencyFormat::suffix("$", ',', NBSP)),
    ("es_ES", EURO_SUFFIX),
    ("it_IT", EURO_SUFFIX),
    ("nl_NL", CurrencyFormat::prefix("€", Some(NBSP), ',', '.')),
    ("pt_BR", CurrencyFormat::prefix("R$", Some(NBSP), ',', '.')),
    (
        "ja_JP",
        CurrencyFormat {
            fraction_digits: 0,
            ..CurrencyFormat::prefix("￥", None, '.', ',')
        },
    ),
    ("zh_CN", CurrencyFormat::prefix("¥", None, '.', ',')),
];

/// Locale used for a bare language tag
static LANGUAGE_DEFAULTS: &[(&str, &str)] = &[
    ("en", "en_US"),
    ("de", "de_DE"),
    ("fr", "fr_FR"),
    ("es", "es_ES"),
    ("it", "it_IT"),
    ("nl", "nl_NL"),
    ("pt", "pt_BR"),
    ("ja", "ja_JP"),
    ("zh", "zh_CN"),
];

const DEFAULT_TAG: &str = "en_US";

/// A resolved locale with its currency conventions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: &'static str,
    format: CurrencyFormat,
}

impl Locale {
    /// Parse a POSIX or BCP 47 style tag (`en_AU.UTF-8`, `de-DE`, `fr`)
    ///
    /// Tags with an unknown region fall back to the language default.
    pub fn parse(tag: &str) -> TaxCostResult<Self> {
        let (language, region) =
            normalize(tag).ok_or_else(|| TaxCostError::Locale(tag.to_string()))?;

        if let Some(region) = region {
            let full = format!("{}_{}", language, region);
            if let Some(locale) = Self::lookup(&full) {
                return Ok(locale);
            }
        }

        LANGUAGE_DEFAULTS
            .iter()
            .find(|(lang, _)| *lang == language)
            .and_then(|(_, full)| Self::lookup(full))
            .ok_or_else(|| TaxCostError::Locale(tag.to_string()))
    }

    /// The `en_US` locale
    pub fn fallback() -> Self {
        Self::lookup(DEFAULT_TAG).unwrap_or(Self {
            tag: DEFAULT_TAG,
            format: DOLLAR,
        })
    }

    /// Resolve the host locale from the process environment
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Resolve the host locale using `lookup` to read variables
    ///
    /// Unparsable host values resolve to [`Locale::fallback`].
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = LOCALE_ENV_VARS
            .iter()
            .filter_map(|key| lookup(*key))
            .find(|value| !value.trim().is_empty());

        match value {
            Some(value) if !is_posix_default(&value) => Self::parse(&value).unwrap_or_else(|_| {
                tracing::debug!(locale = %value, "unknown host locale, using {}", DEFAULT_TAG);
                Self::fallback()
            }),
            _ => Self::fallback(),
        }
    }

    /// Use `override_tag` when given, otherwise the host locale
    pub fn resolve(override_tag: Option<&str>) -> TaxCostResult<Self> {
        match override_tag {
            Some(tag) => Self::parse(tag),
            None => Ok(Self::from_env()),
        }
    }

    fn lookup(full: &str) -> Option<Self> {
        KNOWN_LOCALES
            .iter()
            .find(|(tag, _)| *tag == full)
            .map(|(tag, format)| Self {
                tag: *tag,
                format: *format,
            })
    }

    /// Normalized `language_REGION` tag
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Format `value` as currency in this locale
    ///
    /// Rounds half to even at the locale's fraction digits. A value that
    /// rounds to zero never carries a minus sign.
    pub fn format_currency(&self, value: f64) -> String {
        let format = &self.format;
        let rendered = format!("{:.*}", format.fraction_digits, value.abs());
        let (int_part, frac_part) = match rendered.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (rendered.as_str(), None),
        };

        let mut number = group_digits(int_part, format.group_separator);
        if let Some(frac) = frac_part {
            number.push(format.decimal_separator);
            number.push_str(frac);
        }

        let gap = format.symbol_gap.map(String::from).unwrap_or_default();
        let body = if format.symbol_first {
            format!("{}{}{}", format.symbol, gap, number)
        } else {
            format!("{}{}{}", number, gap, format.symbol)
        };

        let is_zero = rendered.chars().all(|c| c == '0' || c == '.');
        if value.is_sign_negative() && !is_zero {
            format!("-{}", body)
        } else {
            body
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::fallback()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}

/// Split a tag into lowercase language and uppercase region
fn normalize(tag: &str) -> Option<(String, Option<String>)> {
    let base = tag
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('-', "_");

    let mut parts = base.split('_');
    let language = parts.next().filter(|l| !l.is_empty())?;
    if !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let region = parts
        .next()
        .filter(|r| !r.is_empty())
        .map(|r| r.to_ascii_uppercase());

    Some((language.to_ascii_lowercase(), region))
}

fn is_posix_default(value: &str) -> bool {
    let base = value.split('.').next().unwrap_or_default();
    base == "C" || base == "POSIX"
}

/// Insert `separator` every three digits from the right
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}
