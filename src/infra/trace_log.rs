//! Trace sink backed by the logging pipeline.

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::services::TraceSink;
use crate::types::UseCaseTrace;

/// Emits each finished trace as a structured log event.
pub struct LoggingTraceSink;

#[async_trait]
impl TraceSink for LoggingTraceSink {
    async fn register(&self, trace: UseCaseTrace) -> AppResult<()> {
        let elapsed_ms = trace
            .finished_at()
            .map(|end| (end - trace.started_at()).num_milliseconds());

        tracing::info!(
            context = trace.context(),
            transaction_id = %trace.transaction_id(),
            outcome = trace.outcome().map(|o| o.as_str()),
            elapsed_ms,
            metadata = trace.metadata().map(|m| m.to_string()),
            "use case finished"
        );

        Ok(())
    }
}
