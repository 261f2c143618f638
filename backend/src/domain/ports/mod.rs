//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`TagsQuery`], [`TagsCommand`], [`LoginService`]) are called
//! by inbound adapters. The driven port [`TagRepository`] is implemented by
//! outbound storage adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod login_service;
mod tag_repository;
mod tags_command;
mod tags_query;

pub use login_service::{ConfiguredLoginService, DEFAULT_USER_ID, LoginService};
#[cfg(test)]
pub use tag_repository::MockTagRepository;
pub use tag_repository::{TagRepository, TagRepositoryError};
#[cfg(test)]
pub use tags_command::MockTagsCommand;
pub use tags_command::{FixtureTagsCommand, TagsCommand};
#[cfg(test)]
pub use tags_query::MockTagsQuery;
pub use tags_query::{FixtureTagsQuery, TagsQuery};
