//! Driving port for mutating the caller's tags.
//!
//! Mutations on a tag the caller does not own fail with
//! [`ErrorCode::NotFound`](crate::domain::ErrorCode::NotFound), the same as
//! for a tag that does not exist.

use async_trait::async_trait;

use crate::domain::{Error, Tag, TagChanges, TagId, TagName, UserId};

/// Domain use-case port for tag mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagsCommand: Send + Sync {
    /// Create a tag owned by `owner`.
    async fn create_tag(&self, owner: &UserId, name: TagName) -> Result<Tag, Error>;

    /// Apply a partial update to one of `owner`'s tags.
    async fn update_tag(
        &self,
        owner: &UserId,
        id: TagId,
        changes: TagChanges,
    ) -> Result<Tag, Error>;

    /// Permanently remove one of `owner`'s tags.
    async fn delete_tag(&self, owner: &UserId, id: TagId) -> Result<(), Error>;
}

/// Fixture command that echoes inputs without storing anything.
///
/// Updates and deletes report not found because the fixture owns no tags.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTagsCommand;

#[async_trait]
impl TagsCommand for FixtureTagsCommand {
    async fn create_tag(&self, owner: &UserId, name: TagName) -> Result<Tag, Error> {
        Ok(Tag::new(TagId::new(1), name, owner.clone()))
    }

    async fn update_tag(
        &self,
        _owner: &UserId,
        _id: TagId,
        _changes: TagChanges,
    ) -> Result<Tag, Error> {
        Err(Error::not_found("tag not found"))
    }

    async fn delete_tag(&self, _owner: &UserId, _id: TagId) -> Result<(), Error> {
        Err(Error::not_found("tag not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[tokio::test]
    async fn fixture_create_assigns_caller_as_owner() {
        let owner = UserId::random();
        let name = TagName::new("Breakfast").expect("valid");
        let tag = FixtureTagsCommand
            .create_tag(&owner, name.clone())
            .await
            .expect("created");
        assert_eq!(tag.owner(), &owner);
        assert_eq!(tag.name(), &name);
    }

    #[tokio::test]
    async fn fixture_mutations_report_not_found() {
        let owner = UserId::random();
        let update = FixtureTagsCommand
            .update_tag(&owner, TagId::new(1), TagChanges::default())
            .await
            .expect_err("nothing to update");
        let delete = FixtureTagsCommand
            .delete_tag(&owner, TagId::new(1))
            .await
            .expect_err("nothing to delete");
        assert_eq!(update.code(), ErrorCode::NotFound);
        assert_eq!(delete.code(), ErrorCode::NotFound);
    }
}
