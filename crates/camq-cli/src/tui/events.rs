//! Event handling for the TUI.
//!
//! Defines request events and keyboard input processing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use camq_core::Error;

/// Events sent from the request task back to the UI loop.
#[derive(Debug)]
pub enum PanelEvent {
    /// The in-flight request finished, successfully or not
    Settled(Result<String, Error>),
}

/// Input action from keyboard events
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    /// Character input
    Char(char),
    /// Backspace
    Backspace,
    /// Delete
    Delete,
    /// Move cursor left
    Left,
    /// Move cursor right
    Right,
    /// Move cursor to start of line
    Home,
    /// Move cursor to end of line
    End,
    /// Delete word before cursor
    DeleteWord,
    /// Clear the whole input line
    ClearInput,
    /// Submit input
    Submit,
    /// Scroll response up
    ScrollUp,
    /// Scroll response down
    ScrollDown,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Scroll to top
    ScrollToTop,
    /// Scroll to bottom
    ScrollToBottom,
    /// Quit the application
    Quit,
}

/// Convert key event to input action
pub fn key_to_action(key: KeyEvent) -> Option<InputAction> {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(InputAction::Quit),
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Some(InputAction::Quit),
        (KeyCode::Esc, _) => Some(InputAction::Quit),

        // Submit
        (KeyCode::Enter, KeyModifiers::NONE) => Some(InputAction::Submit),

        // Cursor
        (KeyCode::Left, KeyModifiers::NONE) => Some(InputAction::Left),
        (KeyCode::Right, KeyModifiers::NONE) => Some(InputAction::Right),
        (KeyCode::Home, KeyModifiers::NONE) => Some(InputAction::Home),
        (KeyCode::End, KeyModifiers::NONE) => Some(InputAction::End),

        // Scrolling
        (KeyCode::Up, KeyModifiers::NONE) => Some(InputAction::ScrollUp),
        (KeyCode::Down, KeyModifiers::NONE) => Some(InputAction::ScrollDown),
        (KeyCode::PageUp, _) => Some(InputAction::PageUp),
        (KeyCode::PageDown, _) => Some(InputAction::PageDown),
        (KeyCode::Home, KeyModifiers::CONTROL) => Some(InputAction::ScrollToTop),
        (KeyCode::End, KeyModifiers::CONTROL) => Some(InputAction::ScrollToBottom),

        // Editing
        (KeyCode::Backspace, KeyModifiers::NONE) => Some(InputAction::Backspace),
        (KeyCode::Delete, KeyModifiers::NONE) => Some(InputAction::Delete),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => Some(InputAction::DeleteWord),
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Some(InputAction::ClearInput),

        // Characters are accepted while a request is pending; only submit is gated
        (KeyCode::Char(c), KeyModifiers::NONE) => Some(InputAction::Char(c)),
        (KeyCode::Char(c), KeyModifiers::SHIFT) => Some(InputAction::Char(c)),

        _ => None,
    }
}
