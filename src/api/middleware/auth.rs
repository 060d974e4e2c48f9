//! Session authentication gate.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::{AUTHORIZATION_HEADER_PARTS, AUTHORIZATION_TOKEN_POSITION};
use crate::errors::AppError;
use crate::locales::{message, Locale, MessageKey};

/// Authentication middleware for protected routes.
///
/// Whitelisting is the router's decision: public routes are simply never
/// layered with this gate. For everything else the bearer token is verified
/// and the reconstructed session is injected into the request extensions,
/// where it becomes the identity downstream use cases act on.
///
/// Every failure mode collapses to the same localized authorization-required
/// rejection; the caller can never tell a missing header from a malformed
/// one or a bad signature from an expired token. The specific cause is only
/// logged server-side.
///
/// The check is pure in-memory cryptography; the gate performs no I/O and
/// never suspends.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let locale = request
        .headers()
        .get(axum::http::header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(Locale::from_header_value)
        .unwrap_or_default();

    let Some(auth_header) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
    else {
        return Err(unauthorized(locale));
    };

    let parts: Vec<&str> = auth_header.split_whitespace().collect();
    if parts.len() != AUTHORIZATION_HEADER_PARTS {
        tracing::debug!("authorization header does not split into scheme and credential");
        return Err(unauthorized(locale));
    }

    let session = match state.token_service.verify(parts[AUTHORIZATION_TOKEN_POSITION]) {
        Ok(session) => session,
        Err(error) => {
            tracing::debug!(error = %error, "session token verification failed");
            return Err(unauthorized(locale));
        }
    };

    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

fn unauthorized(locale: Locale) -> AppError {
    AppError::unauthorized(message(locale, MessageKey::AuthorizationRequired))
}
