//! JWT-backed token service.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::Config;
use crate::domain::Session;
use crate::errors::AppResult;
use crate::services::TokenService;

/// Signs and verifies session tokens with a process-wide symmetric secret.
///
/// Holds no session store: the authentication state round-trips entirely
/// through the token, which is why revocation is out of scope.
pub struct JwtTokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl JwtTokenService {
    pub fn new(config: &Config) -> Self {
        let mut validation = Validation::new(Algorithm::HS512);
        // Expired means expired: no clock leeway.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret_bytes()),
            validation,
            ttl_secs: config.jwt_expiration_secs,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, session: Session) -> AppResult<String> {
        let now = Utc::now();
        let claims = Session {
            exp: (now + Duration::seconds(self.ttl_secs)).timestamp(),
            iat: now.timestamp(),
            ..session
        };

        Ok(encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &self.encoding,
        )?)
    }

    fn verify(&self, token: &str) -> AppResult<Session> {
        let data = decode::<Session>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_ttl(ttl_secs: i64) -> Config {
        Config::new(
            "test-secret-key-minimum-32-chars!!!!".to_string(),
            ttl_secs,
            "hello-alien".to_string(),
            1000,
            "127.0.0.1".to_string(),
            0,
        )
    }

    #[test]
    fn verify_reconstructs_the_issued_session() {
        let service = JwtTokenService::new(&config_with_ttl(3600));
        let session = Session::open("nikola@tesla.com", "Nikola Tesla");

        let token = service.issue(session.clone()).unwrap();
        let verified = service.verify(&token).unwrap();

        assert_eq!(verified.session_id, session.session_id);
        assert_eq!(verified.email, session.email);
        assert_eq!(verified.name, session.name);
        assert!(verified.exp > Utc::now().timestamp());
    }

    #[test]
    fn expired_tokens_fail_verification() {
        let service = JwtTokenService::new(&config_with_ttl(-120));
        let token = service
            .issue(Session::open("nikola@tesla.com", "Nikola Tesla"))
            .unwrap();

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn tokens_signed_with_another_secret_fail_verification() {
        let issuer = JwtTokenService::new(&Config::new(
            "another-secret-key-minimum-32-chars!".to_string(),
            3600,
            "hello-alien".to_string(),
            1000,
            "127.0.0.1".to_string(),
            0,
        ));
        let verifier = JwtTokenService::new(&config_with_ttl(3600));

        let token = issuer
            .issue(Session::open("nikola@tesla.com", "Nikola Tesla"))
            .unwrap();

        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn garbage_tokens_fail_verification() {
        let service = JwtTokenService::new(&config_with_ttl(3600));
        assert!(service.verify("not-a-token").is_err());
    }
}
