//! Application-level outcome codes, independent of transport.

use serde::{Deserialize, Serialize};

/// Internal outcome code produced by every use case.
///
/// This is a small, closed set; the transport status for each code is
/// declared per route and resolved through the status mapping registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Success,
    InvalidInput,
    Unauthorized,
    NotFound,
    InternalError,
}

impl ApplicationStatus {
    /// Whether this code represents a successful outcome
    pub fn is_success(self) -> bool {
        matches!(self, ApplicationStatus::Success)
    }

    /// Wire name of this code
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Success => "SUCCESS",
            ApplicationStatus::InvalidInput => "INVALID_INPUT",
            ApplicationStatus::Unauthorized => "UNAUTHORIZED",
            ApplicationStatus::NotFound => "NOT_FOUND",
            ApplicationStatus::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
