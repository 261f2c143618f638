//! Diesel table definitions. Must match `backend/migrations` exactly.

diesel::table! {
    /// Tags owned by a single user.
    ///
    /// `name` uses the `C` collation so descending order is byte order.
    tags (id) {
        id -> Int8,
        name -> Varchar,
        user_id -> Uuid,
    }
}
