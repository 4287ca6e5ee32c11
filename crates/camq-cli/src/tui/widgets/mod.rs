//! TUI Widget components.

pub mod input_area;
pub mod response_area;
pub mod status_bar;
pub mod submit_button;
pub mod wrap;

pub use input_area::InputArea;
pub use response_area::ResponseArea;
pub use status_bar::StatusBar;
pub use submit_button::SubmitButton;
