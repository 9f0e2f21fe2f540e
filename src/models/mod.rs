//! Core data models for taxcost
//!
//! The only domain entity is the tax bracket. Amounts stay as raw strings
//! until the calculator parses them.

pub mod bracket;

pub use bracket::{rate_for_identifier, TaxBracket, FALLBACK_RATE};
