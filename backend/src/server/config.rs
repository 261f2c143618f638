//! HTTP server configuration object.

use actix_web::cookie::{Key, SameSite};
use recipe_backend::domain::Account;
use recipe_backend::domain::ports::ConfiguredLoginService;
use recipe_backend::inbound::http::session_config::SessionSettings;
use recipe_backend::outbound::persistence::DbPool;
use std::net::SocketAddr;

/// Everything [`super::create_server`] needs to start listening.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) login: ConfiguredLoginService,
}

impl ServerConfig {
    /// Construct a configuration from resolved session settings.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        let SessionSettings {
            key,
            cookie_secure,
            same_site,
        } = session;
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
            login: ConfiguredLoginService::default(),
        }
    }

    /// Store tags in PostgreSQL through `pool` instead of in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Replace the built-in `admin` account with `accounts`.
    #[must_use]
    pub fn with_accounts(mut self, accounts: Vec<Account>) -> Self {
        self.login = ConfiguredLoginService::new(accounts);
        self
    }
}
