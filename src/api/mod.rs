//! API layer - HTTP handlers and middleware
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers
//! - Middleware (authentication gate)
//! - Custom extractors
//! - Status mapping registry and response dispatcher
//! - Route definitions

pub mod dispatch;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod status_map;

pub use dispatch::{Emission, ResponseDispatcher};
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
pub use status_map::{StatusRegistry, StatusRegistryBuilder};
