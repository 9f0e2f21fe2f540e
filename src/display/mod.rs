//! Display formatting for terminal output
//!
//! Used by the one-shot CLI commands; the TUI draws its own widgets.

pub mod brackets;

pub use brackets::{format_bracket_table, format_rate};
