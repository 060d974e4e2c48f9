//! Infrastructure layer - Adapters behind the service traits
//!
//! This module implements the provider contracts consumed by the use cases:
//! - Token signing/verification (JWT)
//! - Keyed password digest worker
//! - User store and logout registry (in-memory)
//! - Trace persistence (logging sink)

pub mod hasher;
pub mod jwt;
pub mod store;
pub mod trace_log;

pub use hasher::KeyedHasher;
pub use jwt::JwtTokenService;
pub use store::{MemoryLogoutRegistry, MemoryUserStore};
pub use trace_log::LoggingTraceSink;
