//! Terminal User Interface module using ratatui.
//!
//! A title bar, a preformatted response area, and an input line with a
//! submit button.

mod app;
mod events;
mod ui;
mod widgets;

pub use app::run_tui;
