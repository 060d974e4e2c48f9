//! Per-invocation use-case trace record.

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::types::ApplicationStatus;

/// Timing/outcome record of one use-case invocation.
///
/// Opened when the request reaches its handler, finished exactly once at
/// dispatcher teardown and handed to asynchronous persistence. The request
/// lifecycle owns it; after the persistence attempt it is discarded,
/// success or failure.
#[derive(Debug, Clone)]
pub struct UseCaseTrace {
    context: String,
    transaction_id: Uuid,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
    outcome: Option<ApplicationStatus>,
    metadata: Option<Value>,
}

impl UseCaseTrace {
    /// Open a trace for the named use case.
    pub fn start(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            transaction_id: Uuid::new_v4(),
            started_at: Utc::now(),
            finished_at: None,
            outcome: None,
            metadata: None,
        }
    }

    /// An inert trace; never persisted because its context is empty.
    pub fn inert() -> Self {
        Self::start("")
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn transaction_id(&self) -> Uuid {
        self.transaction_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    pub fn outcome(&self) -> Option<ApplicationStatus> {
        self.outcome
    }

    pub fn metadata(&self) -> Option<&Value> {
        self.metadata.as_ref()
    }

    /// Attach request metadata. Callers must not include secrets.
    pub fn set_metadata(&mut self, metadata: Value) {
        self.metadata = Some(metadata);
    }

    /// Record the application status this invocation ended with.
    pub fn set_outcome(&mut self, outcome: ApplicationStatus) {
        self.outcome = Some(outcome);
    }

    /// Close the trace. Only the first call takes effect.
    pub fn finish(&mut self, now: DateTime<Utc>) {
        if self.finished_at.is_none() {
            self.finished_at = Some(now);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn finish_only_takes_effect_once() {
        let mut trace = UseCaseTrace::start("LoginUseCase");
        let first = Utc::now();
        trace.finish(first);
        trace.finish(first + Duration::seconds(5));

        assert_eq!(trace.finished_at(), Some(first));
    }

    #[test]
    fn inert_trace_has_empty_context() {
        assert!(UseCaseTrace::inert().context().is_empty());
    }
}
