//! Port wiring for the HTTP state.

use std::sync::Arc;

use actix_web::web;
use recipe_backend::domain::TagsService;
use recipe_backend::inbound::http::state::HttpState;
use recipe_backend::outbound::memory::InMemoryTagRepository;
use recipe_backend::outbound::persistence::DieselTagRepository;
use tracing::info;

use super::ServerConfig;

/// Build the HTTP state, backed by PostgreSQL when a pool is configured and
/// by the in-memory store otherwise.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let login = Arc::new(config.login.clone());
    let state = match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "tag repository configured");
            let service = Arc::new(TagsService::new(Arc::new(DieselTagRepository::new(
                pool.clone(),
            ))));
            HttpState::new(login, service.clone(), service)
        }
        None => {
            info!(store = "memory", "tag repository configured");
            let service = Arc::new(TagsService::new(Arc::new(InMemoryTagRepository::new())));
            HttpState::new(login, service.clone(), service)
        }
    };
    web::Data::new(state)
}
