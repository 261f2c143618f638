//! Process settings loaded via OrthoConfig from CLI flags and `RECIPE_*`
//! environment variables.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use recipe_backend::domain::{Account, UserId};
use serde::Deserialize;

/// Errors raised while loading or interpreting [`ServerSettings`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(String),
    #[error("invalid bind address '{value}': {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("database pool size must be positive")]
    PoolSize,
    #[error("invalid account entry '{entry}': expected username:password:user-uuid")]
    Account { entry: String },
}

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RECIPE")]
pub struct ServerSettings {
    /// Socket address to listen on.
    #[ortho_config(default = "0.0.0.0:8080".to_owned())]
    pub bind_addr: String,
    /// PostgreSQL URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    #[ortho_config(default = 10)]
    pub db_pool_size: u32,
    /// Login accounts as comma-separated `username:password:user-uuid`
    /// entries. The built-in `admin` account is used when absent.
    pub accounts: Option<String>,
}

impl ServerSettings {
    /// Load settings from the process arguments and environment.
    pub fn load_from_process() -> Result<Self, SettingsError> {
        Self::load_from_iter(std::env::args_os()).map_err(|err| SettingsError::Load(err.to_string()))
    }

    /// Parsed bind address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.trim();
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size; zero is rejected.
    pub fn db_pool_size(&self) -> Result<u32, SettingsError> {
        match self.db_pool_size {
            0 => Err(SettingsError::PoolSize),
            size => Ok(size),
        }
    }

    /// Configured login accounts, or `None` to keep the built-in account.
    pub fn accounts(&self) -> Result<Option<Vec<Account>>, SettingsError> {
        let Some(raw) = self.accounts.as_deref().filter(|raw| !raw.trim().is_empty()) else {
            return Ok(None);
        };
        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(parse_account)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

fn parse_account(entry: &str) -> Result<Account, SettingsError> {
    let invalid = || SettingsError::Account {
        entry: entry.to_owned(),
    };
    let (credentials, user_id) = entry.rsplit_once(':').ok_or_else(invalid)?;
    let (username, password) = credentials.split_once(':').ok_or_else(invalid)?;
    if username.trim().is_empty() || password.is_empty() {
        return Err(invalid());
    }
    let user_id = UserId::new(user_id).map_err(|_| invalid())?;
    Ok(Account::new(username.trim(), password, user_id))
}
