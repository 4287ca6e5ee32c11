//! Drives a QueryPanel against a local mock `/ask` server.

use camq_core::{Answerer, QueryPanel, ASK_LABEL, FAILURE_MESSAGE, THINKING_LABEL};
use camq_http::HttpAnswerer;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn question_is_answered_and_displayed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "CAM is..." })))
        .expect(1)
        .mount(&server)
        .await;

    let answerer = HttpAnswerer::new().with_endpoint(format!("{}/ask", server.uri()));
    let mut panel = QueryPanel::new();

    panel.on_input_change("What is CAM?");
    let submission = panel.on_submit().expect("non-blank query is accepted");
    assert_eq!(panel.submit_label(), THINKING_LABEL);
    assert!(!panel.submit_enabled());
    assert_eq!(panel.response_view(), None);

    let outcome = answerer.ask(submission.query()).await;
    panel.settle(outcome);

    assert_eq!(panel.response_view(), Some("CAM is..."));
    assert_eq!(panel.submit_label(), ASK_LABEL);
    assert_eq!(panel.query(), "What is CAM?");
}

#[tokio::test]
async fn server_error_shows_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let answerer = HttpAnswerer::new().with_endpoint(format!("{}/ask", server.uri()));
    let mut panel = QueryPanel::new();
    panel.on_input_change("anything");

    assert!(panel.submit(&answerer).await);
    assert_eq!(panel.response(), FAILURE_MESSAGE);
    assert!(!panel.is_loading());
}

#[tokio::test]
async fn whitespace_query_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "unused" })))
        .expect(0)
        .mount(&server)
        .await;

    let answerer = HttpAnswerer::new().with_endpoint(format!("{}/ask", server.uri()));
    let mut panel = QueryPanel::new();
    panel.on_input_change(" \t ");

    assert!(!panel.submit(&answerer).await);
    assert_eq!(panel.response(), "");
    assert!(!panel.is_loading());
}
