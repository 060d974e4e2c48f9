//! Application state - Dependency injection container.

use std::sync::Arc;

use super::dispatch::ResponseDispatcher;
use super::routes;
use crate::config::Config;
use crate::infra::{JwtTokenService, KeyedHasher, LoggingTraceSink, MemoryLogoutRegistry, MemoryUserStore};
use crate::services::{
    CredentialStore, LoginUseCase, LogoutRegistrar, LogoutUseCase, PasswordHasher, PingUseCase,
    RegisterUserUseCase, TokenService, TraceSink,
};

/// Application state containing the use cases and their shared collaborators.
#[derive(Clone)]
pub struct AppState {
    pub login: Arc<LoginUseCase>,
    pub logout: Arc<LogoutUseCase>,
    pub register: Arc<RegisterUserUseCase>,
    pub ping: Arc<PingUseCase>,
    /// Consumed directly by the authentication gate
    pub token_service: Arc<dyn TokenService>,
    pub dispatcher: Arc<ResponseDispatcher>,
}

impl AppState {
    /// Create application state with the default adapters.
    ///
    /// The status registry is built here, before any request is served, from
    /// the route declarations; request handling only sees the frozen result.
    pub fn from_config(config: Config) -> Self {
        Self::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryLogoutRegistry::new()),
            Arc::new(KeyedHasher),
            Arc::new(JwtTokenService::new(&config)),
            Arc::new(LoggingTraceSink),
            config,
        )
    }

    /// Create application state with manually injected collaborators.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        registrar: Arc<dyn LogoutRegistrar>,
        hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
        trace_sink: Arc<dyn TraceSink>,
        config: Config,
    ) -> Self {
        let statuses = Arc::new(routes::build_status_registry());
        let dispatcher = Arc::new(ResponseDispatcher::new(statuses, trace_sink));

        Self {
            login: Arc::new(LoginUseCase::new(
                Arc::clone(&store),
                Arc::clone(&hasher),
                Arc::clone(&token_service),
                config.clone(),
            )),
            logout: Arc::new(LogoutUseCase::new(registrar)),
            register: Arc::new(RegisterUserUseCase::new(store, hasher, config)),
            ping: Arc::new(PingUseCase),
            token_service,
            dispatcher,
        }
    }
}
