//! Terminal User Interface module
//!
//! A single calculator screen built with ratatui. The state lives in
//! [`App`]; after every event the screen is described by
//! [`crate::screen::render`] and drawn by [`views::render`].

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
