//! One-shot mode: ask a single question, print what the panel would show.

use anyhow::Result;
use std::io::Write;

use camq_core::{Answerer, QueryPanel};

/// Ask `query` once and write the displayed response to `out`.
///
/// Returns `Ok(false)` when the exchange failed (the fixed failure message is
/// still written), and an error when the query is blank.
pub async fn run(answerer: &dyn Answerer, query: &str, out: &mut impl Write) -> Result<bool> {
    let mut panel = QueryPanel::new();
    panel.on_input_change(query);

    let Some(submission) = panel.on_submit() else {
        anyhow::bail!("No question provided");
    };

    let outcome = answerer.ask(submission.query()).await;
    let answered = outcome.is_ok();
    panel.settle(outcome);

    if let Some(text) = panel.response_view() {
        writeln!(out, "{}", text)?;
    }
    out.flush()?;

    tracing::info!(
        endpoint = answerer.endpoint(),
        answered,
        response_len = panel.response().len(),
        "One-shot question finished"
    );

    Ok(answered)
}
