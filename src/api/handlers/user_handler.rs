//! User handlers.

use axum::{extract::State, response::Response, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::dispatch::Emission;
use crate::api::extractors::{BodyJson, RequestLocale};
use crate::api::AppState;
use crate::domain::Gender;
use crate::errors::AppError;
use crate::services::{RegisterUserDto, RegisterUserUseCase};
use crate::types::UseCaseTrace;

/// Registration request body
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    /// Given name
    #[serde(rename = "firstName")]
    #[schema(example = "Nikola")]
    pub first_name: Option<String>,
    /// Family name
    #[serde(rename = "lastName")]
    #[schema(example = "Tesla")]
    pub last_name: Option<String>,
    /// Email address, unique per user
    #[schema(example = "user@example.com")]
    pub email: Option<String>,
    /// Gender
    pub gender: Option<Gender>,
    /// Base64-encoded password
    #[serde(rename = "passwordB64")]
    #[schema(example = "U2VjdXJlUGFzczEyMw==")]
    pub password_b64: Option<String>,
}

impl From<RegisterRequest> for RegisterUserDto {
    fn from(request: RegisterRequest) -> Self {
        RegisterUserDto {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            gender: request.gender,
            password_b64: request.password_b64,
        }
    }
}

/// Create user routes. Sign-up is public.
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/sign-up", post(sign_up))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/v1/users/sign-up",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User created"),
        (status = 400, description = "Validation failure or duplicate email"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn sign_up(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    BodyJson(payload): BodyJson<RegisterRequest>,
) -> Result<Response, AppError> {
    let mut trace = UseCaseTrace::start(RegisterUserUseCase::CONTEXT);
    let outcome = state
        .register
        .execute(locale, &mut trace, payload.into())
        .await;

    state.dispatcher.respond(trace, outcome, Emission::Dto, &[])
}
