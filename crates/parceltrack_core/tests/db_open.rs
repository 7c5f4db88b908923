use parceltrack_core::db::{open_db, open_db_in_memory, schema::ensure_schema};
use parceltrack_core::{Parcel, ParcelRepository, SqliteParcelRepository, STATUS_REGISTERED};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_parcel_table() {
    let conn = open_db_in_memory().unwrap();

    assert_table_exists(&conn, "parcel");
}

#[test]
fn ensure_schema_is_idempotent() {
    let conn = open_db_in_memory().unwrap();

    ensure_schema(&conn).unwrap();
    ensure_schema(&conn).unwrap();

    assert_table_exists(&conn, "parcel");
}

#[test]
fn reopening_same_database_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tracker.db");

    let conn_first = open_db(&path).unwrap();
    let repo = SqliteParcelRepository::new(&conn_first);
    let number = repo
        .add(&Parcel {
            number: 0,
            client: 1000,
            status: STATUS_REGISTERED.to_string(),
            address: "test".to_string(),
            created_at: "2026-08-05T10:00:00Z".to_string(),
        })
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    let repo = SqliteParcelRepository::new(&conn_second);
    let stored = repo.get(number).unwrap();

    assert_eq!(stored.number, number);
    assert_eq!(stored.client, 1000);
    assert_eq!(stored.address, "test");
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
