//! Logout use case.

use std::sync::Arc;

use serde_json::json;

use super::LogoutRegistrar;
use crate::domain::Session;
use crate::errors::AppResult;
use crate::locales::{message, Locale, MessageKey};
use crate::types::{ApplicationStatus, UseCaseResult, UseCaseTrace};

/// Closes the session attached to the request by the authentication gate.
pub struct LogoutUseCase {
    registrar: Arc<dyn LogoutRegistrar>,
}

impl LogoutUseCase {
    pub const CONTEXT: &'static str = "LogoutUseCase";

    pub fn new(registrar: Arc<dyn LogoutRegistrar>) -> Self {
        Self { registrar }
    }

    pub async fn execute(
        &self,
        locale: Locale,
        trace: &mut UseCaseTrace,
        session: Option<Session>,
    ) -> AppResult<UseCaseResult<()>> {
        let Some(session) = session else {
            return Ok(self.invalid_session(locale));
        };
        if !session.has_identity() {
            return Ok(self.invalid_session(locale));
        }

        trace.set_metadata(json!({ "sessionId": session.session_id.as_str() }));

        // Registration failures are treated as client-correctable.
        match self.registrar.register_logout(&session).await {
            Ok(()) => Ok(UseCaseResult::with_message(message(
                locale,
                MessageKey::SessionClosed,
            ))),
            Err(e) => {
                tracing::warn!(context = Self::CONTEXT, error = %e, "logout registration failed");
                Ok(self.invalid_session(locale))
            }
        }
    }

    fn invalid_session(&self, locale: Locale) -> UseCaseResult<()> {
        UseCaseResult::failure(
            ApplicationStatus::InvalidInput,
            message(locale, MessageKey::InvalidSession),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::services::MockLogoutRegistrar;

    fn valid_session() -> Session {
        Session {
            session_id: "123".to_string(),
            email: "nikola@tesla.com".to_string(),
            name: "Nikola Tesla".to_string(),
            exp: 4_102_444_800,
            iat: 0,
        }
    }

    #[tokio::test]
    async fn missing_session_is_invalid_input() {
        let use_case = LogoutUseCase::new(Arc::new(MockLogoutRegistrar::new()));

        let result = use_case
            .execute(Locale::En, &mut UseCaseTrace::inert(), None)
            .await
            .unwrap();

        assert!(!result.is_success());
        assert_eq!(result.status(), ApplicationStatus::InvalidInput);
    }

    #[tokio::test]
    async fn session_without_identity_is_invalid_input() {
        let use_case = LogoutUseCase::new(Arc::new(MockLogoutRegistrar::new()));
        let session = Session {
            session_id: String::new(),
            email: String::new(),
            name: String::new(),
            exp: 0,
            iat: 0,
        };

        let result = use_case
            .execute(Locale::En, &mut UseCaseTrace::inert(), Some(session))
            .await
            .unwrap();

        assert!(!result.is_success());
        assert_eq!(result.status(), ApplicationStatus::InvalidInput);
    }

    #[tokio::test]
    async fn valid_session_closes_successfully() {
        let mut registrar = MockLogoutRegistrar::new();
        registrar.expect_register_logout().returning(|_| Ok(()));
        let use_case = LogoutUseCase::new(Arc::new(registrar));

        let result = use_case
            .execute(Locale::En, &mut UseCaseTrace::inert(), Some(valid_session()))
            .await
            .unwrap();

        assert!(result.is_success());
        assert_eq!(result.status(), ApplicationStatus::Success);
    }

    #[tokio::test]
    async fn registrar_failure_stays_invalid_input() {
        let mut registrar = MockLogoutRegistrar::new();
        registrar
            .expect_register_logout()
            .returning(|_| Err(AppError::internal("mock failure")));
        let use_case = LogoutUseCase::new(Arc::new(registrar));

        let result = use_case
            .execute(Locale::En, &mut UseCaseTrace::inert(), Some(valid_session()))
            .await
            .unwrap();

        assert!(!result.is_success());
        assert_eq!(result.status(), ApplicationStatus::InvalidInput);
    }
}
