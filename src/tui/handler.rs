//! Event handler for the TUI
//!
//! Routes key events to state changes based on which control has focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.focus {
        Focus::Brackets => handle_bracket_key(app, key),
        Focus::Amount => handle_amount_key(app, key),
    }
}

/// Handle keys when the bracket list has focus
fn handle_bracket_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),

        KeyCode::Char('k') | KeyCode::Up => app.state.select_previous(),
        KeyCode::Char('j') | KeyCode::Down => app.state.select_next(),
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(digit) = c.to_digit(10) {
                app.state.select_index(digit as usize - 1);
            }
        }

        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char('i') => app.focus_amount(),

        _ => {}
    }
}

/// Handle keys when the amount field has focus
fn handle_amount_key(app: &mut App, key: KeyEvent) {
    let chord = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        // "Done" and escape both leave the field
        KeyCode::Enter | KeyCode::Esc => app.clear_focus(),
        KeyCode::Tab => app.toggle_focus(),

        // The bracket can still change while typing
        KeyCode::Up => app.state.select_previous(),
        KeyCode::Down => app.state.select_next(),

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_amount(|field| field.clear())
        }
        KeyCode::Char(c) if !chord => app.edit_amount(|field| field.insert(c)),
        KeyCode::Backspace => app.edit_amount(|field| field.backspace()),
        KeyCode::Delete => app.edit_amount(|field| field.delete()),
        KeyCode::Left => app.edit_amount(|field| field.move_left()),
        KeyCode::Right => app.edit_amount(|field| field.move_right()),
        KeyCode::Home => app.edit_amount(|field| field.move_start()),
        KeyCode::End => app.edit_amount(|field| field.move_end()),

        _ => {}
    }
}
