//! In-memory user store and logout registry.
//!
//! The persistence engine is an opaque capability behind the service traits;
//! these adapters keep everything in process memory, which is all the
//! contract requires of them.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{Session, User};
use crate::errors::{AppError, AppResult};
use crate::services::{CredentialStore, LogoutRegistrar};

/// Users keyed by lowercased email
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryUserStore {
    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::internal("user store lock poisoned"))?;
        Ok(users.get(&email.to_lowercase()).cloned())
    }

    async fn get_by_authentication(
        &self,
        email: &str,
        password_hash: &str,
    ) -> AppResult<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::internal("user store lock poisoned"))?;
        Ok(users
            .get(&email.to_lowercase())
            .filter(|user| user.password_hash == password_hash)
            .cloned())
    }

    async fn register(&self, user: User) -> AppResult<User> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::internal("user store lock poisoned"))?;
        let key = user.email.to_lowercase();
        if users.contains_key(&key) {
            return Err(AppError::internal(format!(
                "user already registered: {key}"
            )));
        }
        users.insert(key, user.clone());
        Ok(user)
    }
}

/// Closed sessions keyed by session id
#[derive(Default)]
pub struct MemoryLogoutRegistry {
    closed: RwLock<HashMap<String, i64>>,
}

impl MemoryLogoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session id has been registered as closed.
    pub fn is_closed(&self, session_id: &str) -> bool {
        self.closed
            .read()
            .map(|closed| closed.contains_key(session_id))
            .unwrap_or(false)
    }
}

#[async_trait]
impl LogoutRegistrar for MemoryLogoutRegistry {
    async fn register_logout(&self, session: &Session) -> AppResult<()> {
        let mut closed = self
            .closed
            .write()
            .map_err(|_| AppError::internal("logout registry lock poisoned"))?;
        closed.insert(session.session_id.clone(), session.exp);
        Ok(())
    }
}
