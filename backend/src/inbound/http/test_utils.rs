//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use crate::domain::TagsService;
use crate::domain::ports::ConfiguredLoginService;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryTagRepository;

/// Session middleware with a fresh key, cookie name `session` and the
/// `Secure` flag off for plain HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// HTTP state over an in-memory repository the caller can seed directly.
pub fn in_memory_state() -> (HttpState, Arc<InMemoryTagRepository>) {
    let repository = Arc::new(InMemoryTagRepository::new());
    let service = Arc::new(TagsService::new(repository.clone()));
    let state = HttpState::new(
        Arc::new(ConfiguredLoginService::default()),
        service.clone(),
        service,
    );
    (state, repository)
}
