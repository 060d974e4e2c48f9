//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_ENCRYPTION_ITERATIONS, DEFAULT_JWT_EXPIRATION_SECS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, MIN_JWT_SECRET_LENGTH,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    jwt_secret: String,
    pub jwt_expiration_secs: i64,
    encryption_key: String,
    pub encryption_iterations: u32,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_secs", &self.jwt_expiration_secs)
            .field("encryption_key", &"[REDACTED]")
            .field("encryption_iterations", &self.encryption_iterations)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Create a configuration from explicit values.
    ///
    /// # Panics
    /// Panics if the JWT secret is too short (security requirement).
    pub fn new(
        jwt_secret: String,
        jwt_expiration_secs: i64,
        encryption_key: String,
        encryption_iterations: u32,
        server_host: String,
        server_port: u16,
    ) -> Self {
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            panic!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            );
        }

        Self {
            jwt_secret,
            jwt_expiration_secs,
            encryption_key,
            encryption_iterations,
            server_host,
            server_port,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if JWT_SECRET is not set or is too short (security requirement).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                // Development mode: use default but warn
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            } else {
                // Production mode: panic
                panic!("JWT_SECRET environment variable must be set in production");
            }
        });

        let encryption_key = env::var("ENCRYPTION_KEY").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                tracing::warn!("ENCRYPTION_KEY not set, using insecure default for development");
                "dev-encryption-key".to_string()
            } else {
                panic!("ENCRYPTION_KEY environment variable must be set in production");
            }
        });

        Self::new(
            jwt_secret,
            env::var("JWT_EXPIRATION_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_JWT_EXPIRATION_SECS),
            encryption_key,
            env::var("ENCRYPTION_ITERATIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_ENCRYPTION_ITERATIONS),
            env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        )
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Get the key material for the keyed password digest.
    pub fn encryption_key(&self) -> &str {
        &self.encryption_key
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
