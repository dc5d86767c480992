//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Submitted orders.
    orders (id) {
        /// Database-assigned identity.
        id -> Int8,
        /// User verified against the user service at submission time.
        user_id -> Int8,
        /// Null only for drafts.
        product_id -> Nullable<Int8>,
        /// One of `draft`, `pending`, `approved`, `canceled`.
        mode -> Varchar,
        created_at -> Timestamptz,
    }
}
