//! Application services layer - Use cases and provider contracts.
//!
//! Use cases orchestrate validation, domain logic and provider calls to
//! produce exactly one `UseCaseResult` per invocation. They depend on
//! abstractions (traits) for dependency inversion; the adapters live in
//! `infra`.

mod login;
mod logout;
mod ping;
mod register;
pub mod validation;

pub use login::{LoginUseCase, TokenPayload};
pub use logout::LogoutUseCase;
pub use ping::PingUseCase;
pub use register::{RegisterUserDto, RegisterUserUseCase};

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::{Session, User};
use crate::errors::AppResult;
use crate::types::UseCaseTrace;

/// Stateless session-token issuance and verification.
///
/// Verification is a pure in-memory cryptographic check: implementations
/// must not perform I/O, so the authentication gate never suspends.
#[cfg_attr(test, automock)]
pub trait TokenService: Send + Sync {
    /// Sign the session into a token, stamping expiry from the configured TTL
    fn issue(&self, session: Session) -> AppResult<String>;

    /// Validate signature and expiry, returning the embedded session unchanged
    fn verify(&self, token: &str) -> AppResult<Session>;
}

/// User/credential store consumed through a narrow contract.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a user by email, regardless of credentials
    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Look up a user by email and password digest in one call.
    ///
    /// The digest comparison belongs to the store, not the caller.
    async fn get_by_authentication(
        &self,
        email: &str,
        password_hash: &str,
    ) -> AppResult<Option<User>>;

    /// Persist a new user
    async fn register(&self, user: User) -> AppResult<User>;
}

/// Records closed sessions on logout.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LogoutRegistrar: Send + Sync {
    async fn register_logout(&self, session: &Session) -> AppResult<()>;
}

/// One-way keyed password digest, offloaded from the request path.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, text: &str, key: &str, iterations: u32) -> AppResult<String>;
}

/// Best-effort persistence for use-case traces.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TraceSink: Send + Sync {
    async fn register(&self, trace: UseCaseTrace) -> AppResult<()>;
}
