//! Test utilities shared across the workspace.
//! Only compiled when running tests or with the `testing` feature.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::answerer::Answerer;
use crate::error::Error;

/// A mock answerer that returns pre-configured outcomes.
pub struct MockAnswerer {
    outcomes: Mutex<Vec<Result<String, Error>>>,
    /// Captured queries (for assertion).
    pub captured_queries: Mutex<Vec<String>>,
    pub endpoint: String,
}

impl MockAnswerer {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(Vec::new()),
            captured_queries: Mutex::new(Vec::new()),
            endpoint: "mock://ask".to_string(),
        }
    }

    /// Queue an answer for the next ask() call.
    /// Outcomes are returned in FIFO order (first queued = first returned).
    pub fn queue_answer(&self, answer: &str) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(0, Ok(answer.to_string()));
    }

    /// Queue a failure for the next ask() call.
    pub fn queue_error(&self, error: Error) {
        self.outcomes.lock().unwrap().insert(0, Err(error));
    }

    /// Get the number of captured requests.
    pub fn request_count(&self) -> usize {
        self.captured_queries.lock().unwrap().len()
    }

    pub fn queries(&self) -> Vec<String> {
        self.captured_queries.lock().unwrap().clone()
    }
}

impl Default for MockAnswerer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Answerer for MockAnswerer {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn ask(&self, query: &str) -> Result<String, Error> {
        self.captured_queries
            .lock()
            .unwrap()
            .push(query.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err(Error::Unknown("No mock outcome queued".to_string())))
    }
}
