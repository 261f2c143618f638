//! [`TagRepository`] backed by a mutex-guarded map.
//!
//! Ordering matches the PostgreSQL adapter, whose `name` column uses the `C`
//! collation: byte-wise name descending, then id descending.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{TagRepository, TagRepositoryError};
use crate::domain::{Tag, TagChanges, TagId, TagName, UserId, listing_order};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    tags: BTreeMap<TagId, Tag>,
}

impl Store {
    fn owned_mut(&mut self, owner: &UserId, id: TagId) -> Option<&mut Tag> {
        self.tags.get_mut(&id).filter(|tag| tag.owner() == owner)
    }
}

/// Volatile tag store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryTagRepository {
    store: Mutex<Store>,
}

impl InMemoryTagRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, TagRepositoryError> {
        self.store
            .lock()
            .map_err(|_| TagRepositoryError::query("tag store lock poisoned"))
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn list_owned(&self, owner: &UserId) -> Result<Vec<Tag>, TagRepositoryError> {
        let store = self.lock()?;
        let mut tags: Vec<Tag> = store
            .tags
            .values()
            .filter(|tag| tag.owner() == owner)
            .cloned()
            .collect();
        tags.sort_by(listing_order);
        Ok(tags)
    }

    async fn find_owned(
        &self,
        owner: &UserId,
        id: TagId,
    ) -> Result<Option<Tag>, TagRepositoryError> {
        let mut store = self.lock()?;
        Ok(store.owned_mut(owner, id).map(|tag| tag.clone()))
    }

    async fn create(&self, owner: &UserId, name: &TagName) -> Result<Tag, TagRepositoryError> {
        let mut store = self.lock()?;
        store.last_id += 1;
        let tag = Tag::new(TagId::new(store.last_id), name.clone(), owner.clone());
        store.tags.insert(tag.id(), tag.clone());
        Ok(tag)
    }

    async fn update_owned(
        &self,
        owner: &UserId,
        id: TagId,
        changes: &TagChanges,
    ) -> Result<Option<Tag>, TagRepositoryError> {
        let mut store = self.lock()?;
        Ok(store.owned_mut(owner, id).map(|tag| {
            tag.apply(changes.clone());
            tag.clone()
        }))
    }

    async fn delete_owned(&self, owner: &UserId, id: TagId) -> Result<bool, TagRepositoryError> {
        let mut store = self.lock()?;
        if store.owned_mut(owner, id).is_none() {
            return Ok(false);
        }
        Ok(store.tags.remove(&id).is_some())
    }
}
