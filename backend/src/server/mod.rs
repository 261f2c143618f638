//! Server construction and middleware wiring.

mod config;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use state_builders::build_http_state;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, web};

use recipe_backend::Trace;
#[cfg(debug_assertions)]
use recipe_backend::doc::ApiDoc;
use recipe_backend::inbound::http::health::{HealthState, live, ready};
use recipe_backend::inbound::http::json_error_handler;
use recipe_backend::inbound::http::login::login;
use recipe_backend::inbound::http::state::HttpState;
use recipe_backend::inbound::http::tags::{
    create_tag, delete_tag, list_tags, replace_tag, update_tag,
};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

const SESSION_COOKIE: &str = "session";
const SESSION_TTL_HOURS: i64 = 2;

/// Per-worker inputs for [`build_app`].
#[derive(Clone)]
struct AppParts {
    health: web::Data<HealthState>,
    state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

/// Private cookie session carrying only the caller's user id.
fn session_middleware(
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
) -> SessionMiddleware<CookieSessionStore> {
    let ttl = actix_web::cookie::time::Duration::hours(SESSION_TTL_HOURS);
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_path("/".to_owned())
        .cookie_http_only(true)
        .cookie_secure(cookie_secure)
        .cookie_same_site(same_site)
        .cookie_content_security(CookieContentSecurity::Private)
        .session_lifecycle(PersistentSession::default().session_ttl(ttl))
        .build()
}

fn build_app(
    parts: AppParts,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = session_middleware(parts.key, parts.cookie_secure, parts.same_site);
    let tag_routes = web::scope("/api/v1")
        .wrap(session)
        .service(login)
        .service(list_tags)
        .service(create_tag)
        .service(update_tag)
        .service(replace_tag)
        .service(delete_tag);

    // Trace is registered last so it runs first and spans the whole request.
    let app = App::new()
        .app_data(parts.health)
        .app_data(parts.state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(NormalizePath::trim())
        .wrap(Trace)
        .service(tag_routes)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server for `config` and mark `health_state` ready.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let parts = AppParts {
        health: health_state.clone(),
        state: build_http_state(&config),
        key: config.key,
        cookie_secure: config.cookie_secure,
        same_site: config.same_site,
    };
    let server = HttpServer::new(move || build_app(parts.clone()))
        .bind(config.bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}
