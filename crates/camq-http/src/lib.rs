//! camq-http: HTTP transport for camq
//!
//! This crate provides the reqwest-backed implementation of the `Answerer`
//! trait, posting questions to a JSON `/ask` endpoint.

pub mod ask;

pub use ask::HttpAnswerer;
