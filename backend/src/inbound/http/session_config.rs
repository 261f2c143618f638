//! Session cookie settings read from the environment.
//!
//! Debug builds fall back to defaults (with a warning) for missing or invalid
//! toggles. Release builds require every toggle to be set explicitly and a
//! signing key file of at least [`SESSION_KEY_MIN_LEN`] bytes.

use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};
use mockable::Env;
use tracing::warn;
use zeroize::Zeroize;

/// Minimum key file length accepted in release builds.
pub const SESSION_KEY_MIN_LEN: usize = 64;

const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/session_key";
const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const SAMESITE_ENV: &str = "SESSION_SAMESITE";
const ALLOW_EPHEMERAL_ENV: &str = "SESSION_ALLOW_EPHEMERAL";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const SAMESITE_EXPECTED: &str = "Strict|Lax|None";

/// How strictly settings are validated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Tolerate missing toggles and fall back to defaults.
    Debug,
    /// Require explicit, valid toggles.
    Release,
}

impl BuildMode {
    /// `Debug` when compiled with debug assertions, `Release` otherwise.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }
}

/// Resolved session cookie settings.
pub struct SessionSettings {
    pub key: Key,
    pub cookie_secure: bool,
    pub same_site: SameSite,
}

/// Errors raised while validating session configuration.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    #[error("SESSION_SAMESITE=None requires SESSION_COOKIE_SECURE=1")]
    InsecureSameSiteNone,
    #[error("SESSION_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

/// A single environment toggle with its parser and debug fallback.
struct Toggle<T> {
    name: &'static str,
    expected: &'static str,
    parse: fn(&str) -> Option<T>,
    debug_default: T,
}

impl<T> Toggle<T> {
    fn read<E: Env>(self, env: &E, mode: BuildMode) -> Result<T, SessionConfigError> {
        let Some(value) = env.string(self.name) else {
            return match mode {
                BuildMode::Debug => {
                    warn!(name = self.name, "session toggle not set; using default");
                    Ok(self.debug_default)
                }
                BuildMode::Release => Err(SessionConfigError::MissingEnv { name: self.name }),
            };
        };
        if let Some(parsed) = (self.parse)(&value) {
            return Ok(parsed);
        }
        match mode {
            BuildMode::Debug => {
                warn!(name = self.name, value = %value, "invalid session toggle; using default");
                Ok(self.debug_default)
            }
            BuildMode::Release => Err(SessionConfigError::InvalidEnv {
                name: self.name,
                value,
                expected: self.expected,
            }),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

fn parse_same_site(value: &str) -> Option<SameSite> {
    match value.to_ascii_lowercase().as_str() {
        "lax" => Some(SameSite::Lax),
        "strict" => Some(SameSite::Strict),
        "none" => Some(SameSite::None),
        _ => None,
    }
}

/// Resolve session settings from `env` under `mode`.
///
/// # Errors
///
/// Returns [`SessionConfigError`] when a release build is missing a toggle,
/// a value does not parse, or the key file is unreadable or too short.
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let cookie_secure = Toggle {
        name: COOKIE_SECURE_ENV,
        expected: BOOL_EXPECTED,
        parse: parse_bool,
        debug_default: true,
    }
    .read(env, mode)?;

    let same_site = Toggle {
        name: SAMESITE_ENV,
        expected: SAMESITE_EXPECTED,
        parse: parse_same_site,
        debug_default: SameSite::Lax,
    }
    .read(env, mode)?;
    if same_site == SameSite::None && !cookie_secure {
        match mode {
            BuildMode::Debug => warn!("SESSION_SAMESITE=None without a secure cookie"),
            BuildMode::Release => return Err(SessionConfigError::InsecureSameSiteNone),
        }
    }

    let allow_ephemeral = Toggle {
        name: ALLOW_EPHEMERAL_ENV,
        expected: BOOL_EXPECTED,
        parse: parse_bool,
        debug_default: false,
    }
    .read(env, mode)?;
    if allow_ephemeral && mode == BuildMode::Release {
        return Err(SessionConfigError::EphemeralNotAllowed);
    }

    let key = session_key(env, mode)?;
    Ok(SessionSettings {
        key,
        cookie_secure,
        same_site,
    })
}

fn session_key<E: Env>(env: &E, mode: BuildMode) -> Result<Key, SessionConfigError> {
    let path = PathBuf::from(
        env.string(KEY_FILE_ENV)
            .unwrap_or_else(|| SESSION_KEY_DEFAULT_PATH.to_owned()),
    );
    let failure = match std::fs::read(&path) {
        Ok(mut bytes) if bytes.len() >= SESSION_KEY_MIN_LEN => {
            let key = Key::derive_from(&bytes);
            bytes.zeroize();
            return Ok(key);
        }
        Ok(mut bytes) => {
            let length = bytes.len();
            bytes.zeroize();
            SessionConfigError::KeyTooShort {
                path,
                length,
                min_len: SESSION_KEY_MIN_LEN,
            }
        }
        Err(source) => SessionConfigError::KeyRead { path, source },
    };
    match mode {
        BuildMode::Debug => {
            warn!(error = %failure, "using temporary session key (dev only)");
            Ok(Key::generate())
        }
        BuildMode::Release => Err(failure),
    }
}
