//! Internal Diesel row structs. Never exposed to the domain.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::tags;

/// Row read from the `tags` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tags)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TagRow {
    pub id: i64,
    pub name: String,
    pub user_id: Uuid,
}

/// Insertable tag; `id` is assigned by the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tags)]
pub(crate) struct NewTagRow<'a> {
    pub name: &'a str,
    pub user_id: Uuid,
}

/// Changeset for partial tag updates. `None` columns are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tags)]
pub(crate) struct TagUpdate<'a> {
    pub name: Option<&'a str>,
}
