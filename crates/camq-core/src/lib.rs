//! camq-core: Core types for camq
//!
//! This crate holds the query panel state machine, the JSON wire types for
//! the `/ask` endpoint, and the `Answerer` trait that transports implement.

pub mod answerer;
pub mod error;
pub mod panel;
pub mod wire;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use answerer::{Answerer, DEFAULT_ENDPOINT};
pub use error::Error;
pub use panel::{QueryPanel, Submission, ASK_LABEL, FAILURE_MESSAGE, THINKING_LABEL};
pub use wire::{AskRequest, AskResponse};

pub type Result<T> = std::result::Result<T, Error>;
