//! Tag domain service implementing the driving ports.
//!
//! The service turns repository outcomes into domain errors: a missing row is
//! always [`Error::not_found`], whether the tag never existed or belongs to
//! another user.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{TagRepository, TagRepositoryError, TagsCommand, TagsQuery};
use crate::domain::{Error, Tag, TagChanges, TagId, TagName, UserId};

const TAG_NOT_FOUND: &str = "tag not found";

/// Tag service over a [`TagRepository`].
#[derive(Clone)]
pub struct TagsService<R> {
    repository: Arc<R>,
}

impl<R> TagsService<R> {
    /// Create a new service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: TagRepositoryError) -> Error {
    match error {
        TagRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("tag repository unavailable: {message}"))
        }
        TagRepositoryError::Query { message } => {
            Error::internal(format!("tag repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> TagsQuery for TagsService<R>
where
    R: TagRepository,
{
    async fn list_tags(&self, owner: &UserId) -> Result<Vec<Tag>, Error> {
        self.repository
            .list_owned(owner)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> TagsCommand for TagsService<R>
where
    R: TagRepository,
{
    async fn create_tag(&self, owner: &UserId, name: TagName) -> Result<Tag, Error> {
        let tag = self
            .repository
            .create(owner, &name)
            .await
            .map_err(map_repository_error)?;
        tracing::debug!(tag_id = %tag.id(), user_id = %owner, "tag created");
        Ok(tag)
    }

    async fn update_tag(
        &self,
        owner: &UserId,
        id: TagId,
        changes: TagChanges,
    ) -> Result<Tag, Error> {
        self.repository
            .update_owned(owner, id, &changes)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(TAG_NOT_FOUND))
    }

    async fn delete_tag(&self, owner: &UserId, id: TagId) -> Result<(), Error> {
        let removed = self
            .repository
            .delete_owned(owner, id)
            .await
            .map_err(map_repository_error)?;
        if removed {
            tracing::debug!(tag_id = %id, user_id = %owner, "tag deleted");
            Ok(())
        } else {
            Err(Error::not_found(TAG_NOT_FOUND))
        }
    }
}

#[cfg(test)]
#[path = "tags_service_tests.rs"]
mod tests;
