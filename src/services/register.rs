//! User registration use case.

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::json;
use validator::ValidateEmail;

use super::{validation, CredentialStore, PasswordHasher};
use crate::config::Config;
use crate::domain::{authentication_text, Gender, User};
use crate::errors::AppResult;
use crate::locales::{message, message_with, Locale, MessageKey, WordKey};
use crate::types::{ApplicationStatus, UseCaseResult, UseCaseTrace};

/// Raw registration input; every field is validated by the use case
#[derive(Debug, Clone, Default)]
pub struct RegisterUserDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<Gender>,
    pub password_b64: Option<String>,
}

/// Creates a new user account.
pub struct RegisterUserUseCase {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<dyn PasswordHasher>,
    config: Config,
}

impl RegisterUserUseCase {
    pub const CONTEXT: &'static str = "RegisterUserUseCase";

    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: Arc<dyn PasswordHasher>,
        config: Config,
    ) -> Self {
        Self {
            store,
            hasher,
            config,
        }
    }

    pub async fn execute(
        &self,
        locale: Locale,
        trace: &mut UseCaseTrace,
        args: RegisterUserDto,
    ) -> AppResult<UseCaseResult<()>> {
        if let Some(msg) = validation::missing_params(
            locale,
            &[
                (WordKey::FirstName, non_empty(args.first_name.as_deref())),
                (WordKey::LastName, non_empty(args.last_name.as_deref())),
                (WordKey::Email, non_empty(args.email.as_deref())),
                (WordKey::Gender, args.gender.is_some()),
                (WordKey::Password, non_empty(args.password_b64.as_deref())),
            ],
        ) {
            return Ok(UseCaseResult::failure(ApplicationStatus::InvalidInput, msg));
        }

        let email = args.email.as_deref().unwrap_or_default().to_lowercase();
        trace.set_metadata(json!({ "email": email.as_str() }));

        if !email.validate_email() {
            return Ok(UseCaseResult::failure(
                ApplicationStatus::InvalidInput,
                message(locale, MessageKey::InvalidEmail),
            ));
        }

        let password = BASE64
            .decode(args.password_b64.as_deref().unwrap_or_default())
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok());
        let password = match password {
            Some(plain) if validation::is_valid_password(&plain) => plain,
            _ => {
                return Ok(UseCaseResult::failure(
                    ApplicationStatus::InvalidInput,
                    message(locale, MessageKey::InvalidPassword),
                ));
            }
        };

        match self.store.get_by_email(&email).await {
            Ok(None) => {}
            Ok(Some(_)) => {
                return Ok(UseCaseResult::failure(
                    ApplicationStatus::InvalidInput,
                    message_with(
                        locale,
                        MessageKey::UserWithEmailAlreadyExists,
                        &[("email", &email)],
                    ),
                ));
            }
            Err(e) => {
                tracing::error!(context = Self::CONTEXT, error = %e, "uniqueness check failed");
                return Ok(self.internal_error(locale, MessageKey::SomethingWentWrong));
            }
        }

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
                return Ok(self.internal_error(locale, MessageKey::SomethingWentWrong));
            }
        };

        let user = User::new(
            email,
            digest,
            args.first_name.unwrap_or_default(),
            args.last_name.unwrap_or_default(),
            args.gender.unwrap_or(Gender::Other),
        );

        if let Err(e) = self.store.register(user).await {
            tracing::error!(context = Self::CONTEXT, error = %e, "user persistence failed");
            return Ok(self.internal_error(locale, MessageKey::ErrorCreatingUser));
        }

        // No sensitive payload is echoed back.
        Ok(UseCaseResult::with_message(message(
            locale,
            MessageKey::UserWasCreated,
        )))
    }

    fn internal_error(&self, locale: Locale, key: MessageKey) -> UseCaseResult<()> {
        UseCaseResult::failure(ApplicationStatus::InternalError, message(locale, key))
    }
}

fn non_empty(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
