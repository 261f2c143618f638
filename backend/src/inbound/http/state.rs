//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on domain ports.

use std::sync::Arc;

use crate::domain::ports::{LoginService, TagsCommand, TagsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub tags_query: Arc<dyn TagsQuery>,
    pub tags_command: Arc<dyn TagsCommand>,
}

impl HttpState {
    /// Bundle the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use recipe_backend::domain::ports::{
    ///     ConfiguredLoginService, FixtureTagsCommand, FixtureTagsQuery,
    /// };
    /// use recipe_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(ConfiguredLoginService::default()),
    ///     Arc::new(FixtureTagsQuery),
    ///     Arc::new(FixtureTagsCommand),
    /// );
    /// let _query = state.tags_query.clone();
    /// ```
    pub fn new(
        login: Arc<dyn LoginService>,
        tags_query: Arc<dyn TagsQuery>,
        tags_command: Arc<dyn TagsCommand>,
    ) -> Self {
        Self {
            login,
            tags_query,
            tags_command,
        }
    }
}
