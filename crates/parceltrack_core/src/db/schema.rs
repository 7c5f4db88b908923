//! Parcel table bootstrap.
//!
//! # Responsibility
//! - Create the `parcel` table and its client index when missing.
//!
//! # Invariants
//! - `ensure_schema` is idempotent; running it on every open is safe.

use super::DbResult;
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the parcel storage shape when it does not exist yet.
///
/// The store owns a single table and tracks no schema version; bootstrap is
/// a one-shot `CREATE TABLE IF NOT EXISTS`.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
