use async_trait::async_trait;

use crate::error::Error;

/// Default address of the question-answering service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/ask";

/// Something that can turn a question into display text.
///
/// Implementations perform exactly one exchange per call and never retry.
/// Every failure (transport, status, decoding) is returned as an `Error`;
/// callers decide how to present it.
#[async_trait]
pub trait Answerer: Send + Sync {
    /// Address the question is sent to.
    fn endpoint(&self) -> &str;

    async fn ask(&self, query: &str) -> Result<String, Error>;
}
