//! Session value object carried inside signed tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated session reconstructed from a verified token.
///
/// The whole authentication state lives in the token payload; there is no
/// server-side session store. A `Session` is only trusted after signature
/// and expiry validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub email: String,
    pub name: String,
    /// Expiry timestamp (seconds since epoch); stamped at token issue time
    pub exp: i64,
    /// Issued-at timestamp (seconds since epoch); stamped at token issue time
    pub iat: i64,
}

impl Session {
    /// Create a session for a freshly authenticated user.
    ///
    /// `exp` and `iat` are left at zero; the token service stamps them
    /// when the session is signed into a token.
    pub fn open(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            session_id: Uuid::new_v4().simple().to_string(),
            email: email.into(),
            name: name.into(),
            exp: 0,
            iat: 0,
        }
    }

    /// Check the minimum fields required to act on this session.
    pub fn has_identity(&self) -> bool {
        !self.session_id.is_empty() && self.exp > 0
    }
}
