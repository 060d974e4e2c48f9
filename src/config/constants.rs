//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default session token lifetime in seconds
pub const DEFAULT_JWT_EXPIRATION_SECS: i64 = 3600;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Default iteration count for the keyed password digest
pub const DEFAULT_ENCRYPTION_ITERATIONS: u32 = 1000;

/// Number of tokens expected in the Authorization header (scheme + credential)
pub const AUTHORIZATION_HEADER_PARTS: usize = 2;

/// Position of the credential within the split Authorization header
pub const AUTHORIZATION_TOKEN_POSITION: usize = 1;

// =============================================================================
// HTTP
// =============================================================================

/// Response header carrying the per-request transaction identifier
pub const TRANSACTION_ID_HEADER: &str = "x-transaction-id";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;
