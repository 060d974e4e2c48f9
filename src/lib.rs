//! User Auth API - user management service with JWT session authentication
//!
//! Login, logout and registration over HTTP, built around a typed use-case
//! pipeline: every use case returns one `UseCaseResult`, the response
//! dispatcher resolves its application status through the route-declared
//! status mapping registry, and each invocation leaves a best-effort trace.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities (User, Session, Credentials)
//! - **locales**: Locale-aware message and word tables
//! - **services**: Use cases and provider contracts
//! - **infra**: Adapters (JWT, keyed hasher, in-memory store, trace sink)
//! - **api**: HTTP handlers, middleware, dispatcher, routes
//! - **types**: Shared pipeline types (status, result, trace)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod locales;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Credentials, Gender, Session, User};
pub use errors::{AppError, AppResult};
pub use types::{ApplicationStatus, UseCaseResult, UseCaseTrace};
