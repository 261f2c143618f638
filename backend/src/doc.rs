//! OpenAPI documentation for the REST API.
//!
//! [`ApiDoc`] registers every HTTP endpoint, the schema mirrors from
//! [`crate::inbound::http::schemas`], and the session cookie security scheme.
//! Swagger UI serves it in debug builds; `cargo run --bin openapi-dump`
//! prints it for external tooling.

use crate::inbound::http::login::LoginRequest;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::tags::{TagRequest, TagResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name of the security scheme attached to authenticated operations.
pub const SESSION_SECURITY_SCHEME: &str = "SessionCookie";

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            SESSION_SECURITY_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the recipe tag API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Recipe backend API",
        description = "Per-user recipe tags behind session authentication, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::login::login,
        crate::inbound::http::tags::list_tags,
        crate::inbound::http::tags::create_tag,
        crate::inbound::http::tags::update_tag,
        crate::inbound::http::tags::replace_tag,
        crate::inbound::http::tags::delete_tag,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        TagResponse,
        TagRequest,
        LoginRequest,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "auth", description = "Session login"),
        (name = "tags", description = "Tags owned by the signed-in user"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
