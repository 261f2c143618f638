//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod login;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
pub mod tags;
#[cfg(test)]
pub mod test_utils;
pub(crate) mod validation;

pub use error::{ApiResult, json_error_handler};
