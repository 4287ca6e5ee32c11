//! The query panel: one input line, one submit control, one response area.
//!
//! `QueryPanel` is a plain state machine. Front ends feed it edits and
//! submissions, run the returned `Submission` through an `Answerer`, and hand
//! the outcome back with `settle`. Rendering reads the accessors below.

use tracing::debug;

use crate::answerer::Answerer;
use crate::error::Error;

/// Shown in place of an answer when the exchange fails for any reason.
pub const FAILURE_MESSAGE: &str = "Error: Unable to get a response.";

/// Submit control label while idle.
pub const ASK_LABEL: &str = "Ask";

/// Submit control label while a request is in flight.
pub const THINKING_LABEL: &str = "Thinking...";

/// A question accepted for sending. Carries the text exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    query: String,
}

impl Submission {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn into_query(self) -> String {
        self.query
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryPanel {
    query: String,
    response: String,
    is_loading: bool,
}

impl QueryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Replace the input text. No trimming or validation.
    pub fn on_input_change(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Try to start a request.
    ///
    /// Returns `None` without touching any state when the query is blank or a
    /// request is already in flight. Otherwise marks the panel as loading,
    /// clears the previous response and returns the text to send.
    pub fn on_submit(&mut self) -> Option<Submission> {
        if self.is_loading || self.query.trim().is_empty() {
            return None;
        }

        self.is_loading = true;
        self.response.clear();

        Some(Submission {
            query: self.query.clone(),
        })
    }

    /// Apply the outcome of the in-flight request. Always ends loading.
    pub fn settle(&mut self, outcome: Result<String, Error>) {
        match outcome {
            Ok(answer) => {
                debug!(answer_len = answer.len(), "Request settled");
                self.response = answer;
            }
            Err(e) => {
                debug!(error = %e, "Request failed");
                self.response = FAILURE_MESSAGE.to_string();
            }
        }
        self.is_loading = false;
    }

    /// Run one full cycle against `answerer`: submit, await, settle.
    ///
    /// Returns `false` if the submission was refused and nothing was sent.
    pub async fn submit(&mut self, answerer: &dyn Answerer) -> bool {
        let Some(submission) = self.on_submit() else {
            return false;
        };
        let outcome = answerer.ask(submission.query()).await;
        self.settle(outcome);
        true
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading {
            THINKING_LABEL
        } else {
            ASK_LABEL
        }
    }

    /// Text for the response area, or `None` when the area should be empty.
    pub fn response_view(&self) -> Option<&str> {
        if self.response.is_empty() {
            None
        } else {
            Some(&self.response)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockAnswerer;

    #[test]
    fn test_initial_state() {
        let panel = QueryPanel::new();
        assert_eq!(panel.query(), "");
        assert_eq!(panel.response_view(), None);
        assert!(!panel.is_loading());
        assert!(panel.submit_enabled());
        assert_eq!(panel.submit_label(), ASK_LABEL);
    }

    #[test]
    fn test_input_change_is_verbatim() {
        let mut panel = QueryPanel::new();
        panel.on_input_change("  What is CAM?  ");
        assert_eq!(panel.query(), "  What is CAM?  ");
    }

    #[test]
    fn test_submit_sets_loading_and_clears_response() {
        let mut panel = QueryPanel::new();
        panel.on_input_change("first");
        panel.on_submit().unwrap();
        panel.settle(Ok("old answer".to_string()));

        panel.on_input_change("second");
        let submission = panel.on_submit().unwrap();

        assert_eq!(submission.query(), "second");
        assert!(panel.is_loading());
        assert_eq!(panel.response(), "");
        assert!(!panel.submit_enabled());
        assert_eq!(panel.submit_label(), THINKING_LABEL);
    }

    #[test]
    fn test_blank_submit_is_noop() {
        for blank in ["", " ", "\t\n  "] {
            let mut panel = QueryPanel::new();
            panel.on_input_change("previous");
            panel.on_submit().unwrap();
            panel.settle(Ok("kept".to_string()));

            panel.on_input_change(blank);
            assert!(panel.on_submit().is_none());
            assert_eq!(panel.response(), "kept");
            assert!(!panel.is_loading());
        }
    }

    #[test]
    fn test_no_overlapping_submission() {
        let mut panel = QueryPanel::new();
        panel.on_input_change("question");
        assert!(panel.on_submit().is_some());
        assert!(panel.on_submit().is_none());
        assert!(panel.is_loading());
    }

    #[test]
    fn test_settle_success() {
        let mut panel = QueryPanel::new();
        panel.on_input_change("meaning of life");
        panel.on_submit().unwrap();
        panel.settle(Ok("42".to_string()));

        assert_eq!(panel.response(), "42");
        assert!(!panel.is_loading());
        assert_eq!(panel.submit_label(), ASK_LABEL);
        // Input survives submission
        assert_eq!(panel.query(), "meaning of life");
    }

    #[test]
    fn test_settle_failure_collapses_to_fixed_message() {
        let failures = [
            Error::network("connection refused"),
            Error::api(500, "Internal Server Error"),
            Error::serialization("expected value at line 1 column 1"),
        ];
        for failure in failures {
            let mut panel = QueryPanel::new();
            panel.on_input_change("question");
            panel.on_submit().unwrap();
            panel.settle(Err(failure));

            assert_eq!(panel.response(), FAILURE_MESSAGE);
            assert!(!panel.is_loading());
            assert_eq!(panel.query(), "question");
        }
    }

    #[test]
    fn test_empty_answer_shows_nothing() {
        let mut panel = QueryPanel::new();
        panel.on_input_change("question");
        panel.on_submit().unwrap();
        panel.settle(Ok(String::new()));
        assert_eq!(panel.response_view(), None);
    }

    #[test]
    fn test_response_view_preserves_whitespace() {
        let mut panel = QueryPanel::new();
        panel.on_input_change("q");
        panel.on_submit().unwrap();
        panel.settle(Ok("- one\n    - nested\n\n".to_string()));
        assert_eq!(panel.response_view(), Some("- one\n    - nested\n\n"));
    }

    #[tokio::test]
    async fn test_submit_round_trip() {
        let answerer = MockAnswerer::new();
        answerer.queue_answer("CAM is...");

        let mut panel = QueryPanel::new();
        panel.on_input_change("What is CAM?");
        assert!(panel.submit(&answerer).await);

        assert_eq!(answerer.queries(), vec!["What is CAM?".to_string()]);
        assert_eq!(panel.response_view(), Some("CAM is..."));
        assert_eq!(panel.submit_label(), ASK_LABEL);
        assert!(!panel.is_loading());
    }

    #[tokio::test]
    async fn test_submit_failure() {
        let answerer = MockAnswerer::new();
        answerer.queue_error(Error::network("connection refused"));

        let mut panel = QueryPanel::new();
        panel.on_input_change("anything");
        assert!(panel.submit(&answerer).await);

        assert_eq!(panel.response(), FAILURE_MESSAGE);
        assert!(!panel.is_loading());
    }

    #[tokio::test]
    async fn test_blank_submit_sends_nothing() {
        let answerer = MockAnswerer::new();
        let mut panel = QueryPanel::new();
        panel.on_input_change("   ");

        assert!(!panel.submit(&answerer).await);
        assert_eq!(answerer.request_count(), 0);
        assert!(!panel.is_loading());
    }
}
