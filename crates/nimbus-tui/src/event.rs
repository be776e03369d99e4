//! Semantic application events — crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Keybindings
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `Tab`                   | `FocusNext`                |
//! | `/`                     | `QueryFocus`               |
//! | `]`                     | `SizeUp`                   |
//! | `[`                     | `SizeDown`                 |
//! | `?`                     | `Help`                     |
//! | `←` / `h`, `→` / `l`    | `Cursor(Left / Right)`     |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | `Enter`                 | `Enter`                    |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! ## Insert mode
//!
//! While the term or skip field has focus the loop calls
//! [`to_app_event_insert`]: every printable key (including `q`, `?`, `[`,
//! `]`, `/`) types its character, and only `Ctrl+c`, `Escape`, `Enter`,
//! `Tab`, `Backspace` and the arrow keys keep their bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Horizontal cursor movement inside a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    /// Cycle focus: term → skip → grid.
    FocusNext,
    /// Jump to the term field.
    QueryFocus,
    /// Grow the matrix by one ring (size + 2, never above `[matrix] max_size`).
    SizeUp,
    /// Shrink the matrix by one ring (size - 2, never below 1).
    SizeDown,
    /// Toggle the help popup.
    Help,
    Cursor(Direction),
    Char(char),
    Backspace,
    /// Run the search.
    Enter,
    Resize(u16, u16),
    /// Leave the active text field or close the help popup.
    Escape,
}

/// Map a raw crossterm [`Event`] in normal (grid) mode.
///
/// Returns `None` for mouse events, key releases and unbound keys.
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] while a text field has focus.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        Char('/') if key.modifiers == Mod::NONE => Some(AppEvent::QueryFocus),

        Char(']') if key.modifiers == Mod::NONE => Some(AppEvent::SizeUp),
        Char('[') if key.modifiers == Mod::NONE => Some(AppEvent::SizeDown),

        // '?' arrives with or without SHIFT depending on the terminal
        Char('?') => Some(AppEvent::Help),

        Left | Char('h') if key.modifiers == Mod::NONE => Some(AppEvent::Cursor(Direction::Left)),
        Right | Char('l') if key.modifiers == Mod::NONE => {
            Some(AppEvent::Cursor(Direction::Right))
        }

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Left => Some(AppEvent::Cursor(Direction::Left)),
        Right => Some(AppEvent::Cursor(Direction::Right)),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
