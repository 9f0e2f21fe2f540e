//! taxcost - tax-adjusted cost calculator
//!
//! Pick one of five income tax brackets, enter an amount, and see the amount
//! reduced by that bracket's flat rate, formatted for the host locale.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: The tax bracket table
//! - `calculator`: Amount parsing and the adjusted cost computation
//! - `locale`: Host locale resolution and currency formatting
//! - `strings`: Display text keyed by identifier
//! - `screen`: Calculator state and its pure screen description
//! - `tui`: The interactive terminal screen
//! - `display`: Table output for the one-shot commands
//! - `config`: Config directory and read-only settings
//! - `logging`: Tracing subscriber setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use taxcost::calculator::calculate;
//! use taxcost::locale::Locale;
//! use taxcost::models::TaxBracket;
//!
//! let locale = Locale::parse("en_US").unwrap();
//! assert_eq!(calculate("1000", TaxBracket::Over180000, &locale), "$550.00");
//! ```

pub mod calculator;
pub mod config;
pub mod display;
pub mod error;
pub mod locale;
pub mod logging;
pub mod models;
pub mod screen;
pub mod strings;
pub mod tui;

pub use error::{TaxCostError, TaxCostResult};
