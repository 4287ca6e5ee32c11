use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use camq_core::{Answerer, AskRequest, AskResponse, Error, DEFAULT_ENDPOINT};

/// Posts questions to a JSON `/ask` endpoint.
///
/// One POST per question, no retries and no request timeout: a server that
/// never answers leaves the call pending.
pub struct HttpAnswerer {
    client: Client,
    endpoint: String,
}

impl HttpAnswerer {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    fn parse_error(&self, status: u16, body: &str) -> Error {
        // FastAPI-style error body
        #[derive(Deserialize)]
        struct ErrorResponse {
            detail: serde_json::Value,
        }

        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(ErrorResponse {
                detail: serde_json::Value::String(message),
            }) => Error::api(status, message),
            Ok(ErrorResponse { detail }) => Error::api(status, detail.to_string()),
            Err(_) => Error::api(status, body.to_string()),
        }
    }
}

impl Default for HttpAnswerer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Answerer for HttpAnswerer {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn ask(&self, query: &str) -> Result<String, Error> {
        debug!(endpoint = %self.endpoint, query_len = query.len(), "Sending question");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&AskRequest::new(query))
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        debug!(status = status.as_u16(), body_len = body.len(), "Received response");

        if !status.is_success() {
            return Err(self.parse_error(status.as_u16(), &body));
        }

        let answer = AskResponse::from_body(&body)?;
        Ok(answer.answer_text())
    }
}
