//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, status_handler, user_handler};
use crate::domain::Gender;
use crate::services::TokenPayload;

/// OpenAPI documentation for the user auth API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Auth API",
        version = "0.1.0",
        description = "User management API with JWT session authentication",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        status_handler::ping,
        auth_handler::login,
        auth_handler::logout,
        user_handler::sign_up,
    ),
    components(
        schemas(
            Gender,
            TokenPayload,
            auth_handler::LoginRequest,
            user_handler::RegisterRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Status", description = "Service liveness"),
        (name = "Authentication", description = "Session management"),
        (name = "Users", description = "User registration")
    )
)]
pub struct ApiDoc;

/// Adds the bearer token security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
