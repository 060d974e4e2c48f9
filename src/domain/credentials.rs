//! Login credentials value object.
//!
//! The password travels base64-encoded and is never persisted as received:
//! it is decoded and run through the keyed one-way digest before any
//! comparison or storage.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Transient credentials received from the login request
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: Option<String>,
    pub password_b64: Option<String>,
}

impl Credentials {
    /// Decode the base64 password, if present and valid UTF-8.
    pub fn decoded_password(&self) -> Option<String> {
        let encoded = self.password_b64.as_deref()?;
        let bytes = BASE64.decode(encoded).ok()?;
        String::from_utf8(bytes).ok()
    }
}

/// Build the text fed to the keyed digest for an authentication attempt.
///
/// The shape must match what registration stored, so the credential store
/// can compare digests in a single lookup.
pub fn authentication_text(email: &str, plain_password: &str) -> String {
    format!("{}-{}", email.to_lowercase(), plain_password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_base64_password() {
        let credentials = Credentials {
            email: Some("a@example.com".to_string()),
            password_b64: Some("U2VjdXJlUGFzczEyMw==".to_string()),
        };
        assert_eq!(credentials.decoded_password().as_deref(), Some("SecurePass123"));
    }

    #[test]
    fn rejects_invalid_base64() {
        let credentials = Credentials {
            email: Some("a@example.com".to_string()),
            password_b64: Some("not base64!!".to_string()),
        };
        assert!(credentials.decoded_password().is_none());
    }

    #[test]
    fn authentication_text_lowercases_email() {
        assert_eq!(
            authentication_text("Nikola@Tesla.com", "pigeon"),
            "nikola@tesla.com-pigeon"
        );
    }
}
