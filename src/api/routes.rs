//! Application route configuration.

use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{auth_routes, status_routes, user_routes};
use super::openapi::ApiDoc;
use super::status_map::{StatusRegistry, StatusRegistryBuilder};
use super::AppState;
use crate::types::ApplicationStatus;

/// Build the status mapping registry from the route declarations.
///
/// Each route registers the application statuses it can produce, mirroring
/// the route table below. Registration is first-write-wins, so the
/// declaration order cannot change an already-agreed mapping, and the result
/// is frozen before the server accepts traffic.
pub fn build_status_registry() -> StatusRegistry {
    let mut builder = StatusRegistryBuilder::new();

    // GET /ping
    builder.register(ApplicationStatus::Success, StatusCode::OK);

    // POST /v1/auth/login
    builder
        .register(ApplicationStatus::Success, StatusCode::OK)
        .register(ApplicationStatus::InvalidInput, StatusCode::BAD_REQUEST)
        .register(ApplicationStatus::InternalError, StatusCode::INTERNAL_SERVER_ERROR);

    // POST /v1/auth/logout
    builder
        .register(ApplicationStatus::Success, StatusCode::OK)
        .register(ApplicationStatus::InvalidInput, StatusCode::BAD_REQUEST)
        .register(ApplicationStatus::Unauthorized, StatusCode::UNAUTHORIZED);

    // POST /v1/users/sign-up
    builder
        .register(ApplicationStatus::Success, StatusCode::OK)
        .register(ApplicationStatus::InvalidInput, StatusCode::BAD_REQUEST)
        .register(ApplicationStatus::InternalError, StatusCode::INTERNAL_SERVER_ERROR);

    builder.fallback(StatusCode::INTERNAL_SERVER_ERROR);

    builder.build()
}

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Whitelisted status endpoint
        .merge(status_routes())
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Authentication routes (logout is gated inside)
        .nest("/v1/auth", auth_routes(state.clone()))
        // User routes (sign-up is public)
        .nest("/v1/users", user_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
