//! Liveness use case.
//!
//! Runs through the same pipeline as every other use case so the ping route
//! exercises status resolution, tracing and dispatch end to end.

use chrono::Utc;

use crate::errors::AppResult;
use crate::locales::Locale;
use crate::types::{UseCaseResult, UseCaseTrace};

pub struct PingUseCase;

impl PingUseCase {
    pub const CONTEXT: &'static str = "PingUseCase";

    pub async fn execute(
        &self,
        _locale: Locale,
        _trace: &mut UseCaseTrace,
    ) -> AppResult<UseCaseResult<String>> {
        Ok(UseCaseResult::success_with(format!(
            "Pong at {}",
            Utc::now().to_rfc3339()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApplicationStatus;

    #[tokio::test]
    async fn ping_always_succeeds() {
        let result = PingUseCase
            .execute(Locale::En, &mut UseCaseTrace::inert())
            .await
            .unwrap();

        assert_eq!(result.status(), ApplicationStatus::Success);
        assert!(result.data().unwrap().starts_with("Pong at "));
    }
}
