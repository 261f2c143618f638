//! PostgreSQL-backed [`TagRepository`] using Diesel.
//!
//! Every statement starts from [`owned_tags`], which applies the
//! `user_id = owner` predicate. Nothing in this module touches the `tags`
//! table without it.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{TagRepository, TagRepositoryError};
use crate::domain::{Tag, TagChanges, TagId, TagName, UserId};

use super::models::{NewTagRow, TagRow, TagUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::tags;

type OwnedTags = diesel::dsl::Filter<tags::table, diesel::dsl::Eq<tags::user_id, Uuid>>;

/// Tags belonging to `owner`.
fn owned_tags(owner: &UserId) -> OwnedTags {
    tags::table.filter(tags::user_id.eq(*owner.as_uuid()))
}

/// Diesel-backed tag repository.
#[derive(Clone)]
pub struct DieselTagRepository {
    pool: DbPool,
}

impl DieselTagRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TagRepositoryError {
    TagRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> TagRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => TagRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => TagRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            TagRepositoryError::connection("database connection error")
        }
        _ => TagRepositoryError::query("database error"),
    }
}

fn row_to_tag(row: TagRow) -> Result<Tag, TagRepositoryError> {
    let name = TagName::new(row.name).map_err(|err| {
        TagRepositoryError::query(format!("stored tag {} is invalid: {err}", row.id))
    })?;
    Ok(Tag::new(TagId::new(row.id), name, UserId::from_uuid(row.user_id)))
}

#[async_trait]
impl TagRepository for DieselTagRepository {
    async fn list_owned(&self, owner: &UserId) -> Result<Vec<Tag>, TagRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TagRow> = owned_tags(owner)
            .order((tags::name.desc(), tags::id.desc()))
            .select(TagRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_tag).collect()
    }

    async fn find_owned(
        &self,
        owner: &UserId,
        id: TagId,
    ) -> Result<Option<Tag>, TagRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TagRow> = owned_tags(owner)
            .filter(tags::id.eq(id.get()))
            .select(TagRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_tag).transpose()
    }

    async fn create(&self, owner: &UserId, name: &TagName) -> Result<Tag, TagRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewTagRow {
            name: name.as_ref(),
            user_id: *owner.as_uuid(),
        };
        let row: TagRow = diesel::insert_into(tags::table)
            .values(&new_row)
            .returning(TagRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_tag(row)
    }

    async fn update_owned(
        &self,
        owner: &UserId,
        id: TagId,
        changes: &TagChanges,
    ) -> Result<Option<Tag>, TagRepositoryError> {
        // Diesel rejects an UPDATE with no columns to set.
        if changes.is_empty() {
            return self.find_owned(owner, id).await;
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let update = TagUpdate {
            name: changes.name.as_ref().map(AsRef::as_ref),
        };
        let row: Option<TagRow> = diesel::update(owned_tags(owner).filter(tags::id.eq(id.get())))
            .set(&update)
            .returning(TagRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_tag).transpose()
    }

    async fn delete_owned(&self, owner: &UserId, id: TagId) -> Result<bool, TagRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(owned_tags(owner).filter(tags::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}
