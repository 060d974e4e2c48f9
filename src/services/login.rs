//! Login use case.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use super::{validation, CredentialStore, PasswordHasher, TokenService};
use crate::config::Config;
use crate::domain::{authentication_text, Credentials, Session};
use crate::errors::AppResult;
use crate::locales::{message, Locale, MessageKey, WordKey};
use crate::types::{ApplicationStatus, UseCaseResult, UseCaseTrace};

/// Session token returned on successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenPayload {
    /// Signed session token
    #[schema(example = "eyJhbGciOiJIUzUxMiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

/// Authenticates a user and issues a session token.
pub struct LoginUseCase {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
    config: Config,
}

impl LoginUseCase {
    pub const CONTEXT: &'static str = "LoginUseCase";

    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
        config: Config,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
            config,
        }
    }

    pub async fn execute(
        &self,
        locale: Locale,
        trace: &mut UseCaseTrace,
        credentials: Credentials,
    ) -> AppResult<UseCaseResult<TokenPayload>> {
        if let Some(msg) = validation::missing_params(
            locale,
            &[
                (
                    WordKey::Email,
                    credentials.email.as_deref().is_some_and(|v| !v.is_empty()),
                ),
                (
                    WordKey::Password,
                    credentials
                        .password_b64
                        .as_deref()
                        .is_some_and(|v| !v.is_empty()),
                ),
            ],
        ) {
            return Ok(UseCaseResult::failure(ApplicationStatus::InvalidInput, msg));
        }

        let email = credentials.email.as_deref().unwrap_or_default().to_lowercase();
        trace.set_metadata(json!({ "email": email.as_str() }));

        // A password that does not decode gets the same answer as a wrong one.
        let Some(password) = credentials.decoded_password() else {
            return Ok(self.invalid_credentials(locale));
        };

        let digest = match self
            .hasher
            .hash(
                &authentication_text(&email, &password),
                self.config.encryption_key(),
                self.config.encryption_iterations,
            )
            .await
        {
            Ok(digest) => digest,
            Err(e) => {
                tracing::error!(context = Self::CONTEXT, error = %e, "password digest failed");
                return Ok(self.internal_error(locale));
            }
        };

        let user = match self.store.get_by_authentication(&email, &digest).await {
            Ok(Some(user)) => user,
            Ok(None) => return Ok(self.invalid_credentials(locale)),
            Err(e) => {
                tracing::error!(context = Self::CONTEXT, error = %e, "credential lookup failed");
                return Ok(self.internal_error(locale));
            }
        };

        let session = Session::open(user.email.clone(), user.full_name());
        let token = match self.tokens.issue(session) {
            Ok(token) => token,
            Err(e) => {
                tracing::error!(context = Self::CONTEXT, error = %e, "token issuance failed");
                return Ok(self.internal_error(locale));
            }
        };

        Ok(UseCaseResult::success_with(TokenPayload { token }))
    }

    /// Uniform rejection: never reveals whether the email or password was wrong.
    fn invalid_credentials(&self, locale: Locale) -> UseCaseResult<TokenPayload> {
        UseCaseResult::failure(
            ApplicationStatus::InvalidInput,
            message(locale, MessageKey::InvalidUserOrPassword),
        )
    }

    fn internal_error(&self, locale: Locale) -> UseCaseResult<TokenPayload> {
        UseCaseResult::failure(
            ApplicationStatus::InternalError,
            message(locale, MessageKey::SomethingWentWrong),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gender, User};
    use crate::errors::AppError;
    use crate::services::{MockCredentialStore, MockPasswordHasher, MockTokenService};
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

    fn test_config() -> Config {
        Config::new(
            "test-secret-key-minimum-32-chars!!!!".to_string(),
            3600,
            "hello-alien".to_string(),
            1000,
            "127.0.0.1".to_string(),
            0,
        )
    }

    fn stored_user() -> User {
        User::new(
            "nikola@tesla.com".to_string(),
            "digest".to_string(),
            "Nikola".to_string(),
            "Tesla".to_string(),
            Gender::Male,
        )
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: Some(email.to_string()),
            password_b64: Some(BASE64.encode(password)),
        }
    }

    fn use_case(
        store: MockCredentialStore,
        hasher: MockPasswordHasher,
        tokens: MockTokenService,
    ) -> LoginUseCase {
        LoginUseCase::new(
            Arc::new(store),
            Arc::new(hasher),
            Arc::new(tokens),
            test_config(),
        )
    }

    fn hasher_returning(digest: &'static str) -> MockPasswordHasher {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(move |_, _, _| Ok(digest.to_string()));
        hasher
    }

    #[tokio::test]
    async fn missing_credentials_are_invalid_input() {
        let use_case = use_case(
            MockCredentialStore::new(),
            MockPasswordHasher::new(),
            MockTokenService::new(),
        );

        let result = use_case
            .execute(
                Locale::En,
                &mut UseCaseTrace::inert(),
                Credentials::default(),
            )
            .await
            .unwrap();

        assert_eq!(result.status(), ApplicationStatus::InvalidInput);
        assert_eq!(
            result.message(),
            Some("Some parameters are missing: email, password.")
        );
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_get_the_same_message() {
        let mut store = MockCredentialStore::new();
        store
            .expect_get_by_authentication()
            .returning(|_, _| Ok(None));
        let use_case = use_case(store, hasher_returning("digest"), MockTokenService::new());

        let unknown = use_case
            .execute(
                Locale::En,
                &mut UseCaseTrace::inert(),
                credentials("nobody@example.com", "SecurePass123"),
            )
            .await
            .unwrap();
        let wrong_password = use_case
            .execute(
                Locale::En,
                &mut UseCaseTrace::inert(),
                credentials("nikola@tesla.com", "WrongPass123"),
            )
            .await
            .unwrap();

        assert_eq!(unknown.status(), ApplicationStatus::InvalidInput);
        assert_eq!(wrong_password.status(), ApplicationStatus::InvalidInput);
        assert_eq!(unknown.message(), wrong_password.message());
        assert_eq!(unknown.message(), Some("Invalid user or password."));
    }

    #[tokio::test]
    async fn successful_login_returns_a_token_payload() {
        let mut store = MockCredentialStore::new();
        store
            .expect_get_by_authentication()
            .returning(|_, _| Ok(Some(stored_user())));
        let mut tokens = MockTokenService::new();
        tokens
            .expect_issue()
            .returning(|_| Ok("signed-token".to_string()));
        let use_case = use_case(store, hasher_returning("digest"), tokens);

        let result = use_case
            .execute(
                Locale::En,
                &mut UseCaseTrace::inert(),
                credentials("nikola@tesla.com", "SecurePass123"),
            )
            .await
            .unwrap();

        assert!(result.is_success());
        assert_eq!(result.data().unwrap().token, "signed-token");
    }

    #[tokio::test]
    async fn store_failure_is_an_internal_error() {
        let mut store = MockCredentialStore::new();
        store
            .expect_get_by_authentication()
            .returning(|_, _| Err(AppError::internal("store down")));
        let use_case = use_case(store, hasher_returning("digest"), MockTokenService::new());

        let result = use_case
            .execute(
                Locale::En,
                &mut UseCaseTrace::inert(),
                credentials("nikola@tesla.com", "SecurePass123"),
            )
            .await
            .unwrap();

        assert_eq!(result.status(), ApplicationStatus::InternalError);
    }
}
