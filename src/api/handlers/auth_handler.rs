//! Authentication handlers.

use axum::{
    extract::State,
    middleware,
    response::Response,
    routing::post,
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::dispatch::Emission;
use crate::api::extractors::{BodyJson, RequestLocale};
use crate::api::middleware::auth_middleware;
use crate::api::AppState;
use crate::domain::{Credentials, Session};
use crate::errors::AppError;
use crate::services::{LoginUseCase, LogoutUseCase};
use crate::types::UseCaseTrace;

/// Login request body
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: Option<String>,
    /// Base64-encoded password
    #[serde(rename = "passwordB64")]
    #[schema(example = "U2VjdXJlUGFzczEyMw==")]
    pub password_b64: Option<String>,
}

impl From<LoginRequest> for Credentials {
    fn from(request: LoginRequest) -> Self {
        Credentials {
            email: request.email,
            password_b64: request.password_b64,
        }
    }
}

/// Create authentication routes. Login is public; logout sits behind the
/// authentication gate.
pub fn auth_routes(state: AppState) -> Router<AppState> {
    Router::new().route("/login", post(login)).merge(
        Router::new()
            .route("/logout", post(logout))
            .route_layer(middleware::from_fn_with_state(state, auth_middleware)),
    )
}

/// Login with email and base64-encoded password
#[utoipa::path(
    post,
    path = "/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, token in data"),
        (status = 400, description = "Missing or invalid credentials"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    BodyJson(payload): BodyJson<LoginRequest>,
) -> Result<Response, AppError> {
    let mut trace = UseCaseTrace::start(LoginUseCase::CONTEXT);
    let outcome = state
        .login
        .execute(locale, &mut trace, payload.into())
        .await;

    state
        .dispatcher
        .respond(trace, outcome, Emission::Envelope, &[])
}

/// Close the current session
#[utoipa::path(
    post,
    path = "/v1/auth/logout",
    tag = "Authentication",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Session closed"),
        (status = 400, description = "Invalid session"),
        (status = 401, description = "Authorization required")
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    session: Option<Extension<Session>>,
) -> Result<Response, AppError> {
    let session = session.map(|Extension(session)| session);

    let mut trace = UseCaseTrace::start(LogoutUseCase::CONTEXT);
    let outcome = state.logout.execute(locale, &mut trace, session).await;

    state
        .dispatcher
        .respond(trace, outcome, Emission::Envelope, &[])
}
