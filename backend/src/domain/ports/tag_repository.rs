//! Driven port for tag storage.
//!
//! Every operation takes the owning [`UserId`]. Adapters must apply the owner
//! predicate to each statement, so a tag owned by someone else behaves
//! exactly like a tag that does not exist.

use async_trait::async_trait;

use crate::domain::{Tag, TagChanges, TagId, TagName, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by tag repository adapters.
    pub enum TagRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "tag repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "tag repository query failed: {message}",
    }
}

/// Owner-scoped tag persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// All tags owned by `owner`, ordered by name descending then id
    /// descending.
    async fn list_owned(&self, owner: &UserId) -> Result<Vec<Tag>, TagRepositoryError>;

    /// Fetch a single tag if `owner` owns it.
    async fn find_owned(
        &self,
        owner: &UserId,
        id: TagId,
    ) -> Result<Option<Tag>, TagRepositoryError>;

    /// Insert a tag owned by `owner` and return it with its assigned id.
    async fn create(&self, owner: &UserId, name: &TagName) -> Result<Tag, TagRepositoryError>;

    /// Apply `changes` to a tag owned by `owner`.
    ///
    /// Returns `None` when no such tag exists for `owner`. An empty change set
    /// returns the stored tag unchanged.
    async fn update_owned(
        &self,
        owner: &UserId,
        id: TagId,
        changes: &TagChanges,
    ) -> Result<Option<Tag>, TagRepositoryError>;

    /// Delete a tag owned by `owner`. Returns whether a row was removed.
    async fn delete_owned(&self, owner: &UserId, id: TagId) -> Result<bool, TagRepositoryError>;
}
