//! Application-status to transport-status mapping.
//!
//! Routes declare which application statuses they can produce and the
//! transport code for each. Declarations are collected during startup by the
//! builder; request handling only ever sees the immutable built registry, so
//! no locking is involved on the hot path.

use std::collections::HashMap;

use axum::http::StatusCode;

use crate::errors::{AppError, AppResult};
use crate::types::ApplicationStatus;

/// Startup-phase collector of route `produces` declarations.
#[derive(Debug, Default)]
pub struct StatusRegistryBuilder {
    entries: HashMap<ApplicationStatus, StatusCode>,
    fallback: Option<StatusCode>,
}

impl StatusRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mapping for `code`. The first registration wins; later
    /// registrations for the same code are no-ops, so route declarations
    /// made in any order converge on one canonical mapping set.
    pub fn register(&mut self, code: ApplicationStatus, status: StatusCode) -> &mut Self {
        self.entries.entry(code).or_insert(status);
        self
    }

    /// Transport status for codes no route declared.
    pub fn fallback(&mut self, status: StatusCode) -> &mut Self {
        self.fallback = Some(status);
        self
    }

    /// Freeze the declarations into the serving-phase registry.
    pub fn build(self) -> StatusRegistry {
        StatusRegistry {
            entries: self.entries,
            fallback: self.fallback,
        }
    }
}

/// Immutable snapshot used during request handling.
#[derive(Debug)]
pub struct StatusRegistry {
    entries: HashMap<ApplicationStatus, StatusCode>,
    fallback: Option<StatusCode>,
}

impl StatusRegistry {
    /// Resolve the transport status for an application status.
    ///
    /// An unmapped code without a configured fallback is a programming
    /// error: every status a use case can emit must be declared by a route.
    pub fn resolve(&self, code: ApplicationStatus) -> AppResult<StatusCode> {
        self.entries
            .get(&code)
            .copied()
            .or(self.fallback)
            .ok_or(AppError::MappingNotFound(code))
    }
}
