//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::{TaxCostError, TaxCostResult};
use crate::locale::Locale;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> TaxCostResult<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode().map_err(tui_error)?;
    let mut stdout = io::stdout();
    enter_alternate_screen(&mut stdout, || {
        let _ = disable_raw_mode();
    })
    .map_err(tui_error)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(tui_error)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> TaxCostResult<()> {
    disable_raw_mode().map_err(tui_error)?;
    execute!(io::stdout(), LeaveAlternateScreen).map_err(tui_error)?;
    Ok(())
}

/// Switch `out` to the alternate screen, running `undo` if that fails
///
/// Raw mode is already on at this point; `undo` turns it back off so a
/// failed start leaves the shell usable.
fn enter_alternate_screen<W: Write>(out: &mut W, undo: impl FnOnce()) -> io::Result<()> {
    execute!(out, EnterAlternateScreen).map_err(|e| {
        undo();
        e
    })
}

fn tui_error(err: io::Error) -> TaxCostError {
    TaxCostError::Tui(err.to_string())
}

/// Run the TUI application
pub fn run_tui(locale: Locale) -> TaxCostResult<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(locale);
    tracing::info!(locale = %app.locale, "calculator started");

    let result = event_loop(&mut terminal, &mut app);

    // Restore even when the loop failed, then report the loop's error
    restore_terminal()?;
    result
}

/// Draw, wait for an event, apply it; until quit
fn event_loop(terminal: &mut Tui, app: &mut App) -> TaxCostResult<()> {
    let events = EventHandler::default();

    while !app.should_quit {
        terminal
            .draw(|frame| super::views::render(frame, app))
            .map_err(tui_error)?;

        let event = events.next().map_err(tui_error)?;
        handle_event(app, event);
    }

    tracing::info!("calculator closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_failed_screen_switch_undoes_raw_mode() {
        let mut undone = false;
        let err = enter_alternate_screen(&mut BrokenPipe, || undone = true).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(undone);
    }

    #[test]
    fn test_screen_switch_keeps_raw_mode_on_success() {
        let mut out = Vec::new();
        let mut undone = false;
        enter_alternate_screen(&mut out, || undone = true).unwrap();
        assert!(!out.is_empty());
        assert!(!undone);
    }
}
