//! Service status handlers.

use axum::{extract::State, response::Response, routing::get, Router};

use crate::api::dispatch::Emission;
use crate::api::extractors::RequestLocale;
use crate::api::AppState;
use crate::errors::AppError;
use crate::services::PingUseCase;
use crate::types::UseCaseTrace;

/// Create status routes. Ping is whitelisted.
pub fn status_routes() -> Router<AppState> {
    Router::new().route("/ping", get(ping))
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/ping",
    tag = "Status",
    responses((status = 200, description = "Service is alive"))
)]
pub async fn ping(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
) -> Result<Response, AppError> {
    let mut trace = UseCaseTrace::start(PingUseCase::CONTEXT);
    let outcome = state.ping.execute(locale, &mut trace).await;

    state.dispatcher.respond(trace, outcome, Emission::Data, &[])
}
