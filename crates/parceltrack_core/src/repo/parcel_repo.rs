//! Parcel repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `parcel` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Address updates and deletion require the current status to be
//!   `registered`; the guard reads the status before writing.
//! - The guard read and the following write are separate statements, not one
//!   transaction. A concurrent status update can land between them; callers
//!   that need stricter isolation must serialize access themselves.
//! - Status updates accept any string and ignore missing rows, matching the
//!   zero-affected-rows contract of a plain UPDATE.

use crate::db::DbError;
use crate::model::parcel::{Parcel, STATUS_REGISTERED};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PARCEL_SELECT_SQL: &str = "SELECT
    number,
    client,
    status,
    address,
    created_at
FROM parcel";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for parcel persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(i64),
    NotRegistered { number: i64, status: String },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(number) => write!(f, "parcel not found: {number}"),
            Self::NotRegistered { number, status } => write!(
                f,
                "parcel {number} has status `{status}`; address changes and deletion require status `{STATUS_REGISTERED}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::NotRegistered { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for parcel CRUD operations.
pub trait ParcelRepository {
    /// Persists a new parcel and returns its store-assigned number.
    fn add(&self, parcel: &Parcel) -> RepoResult<i64>;
    /// Gets one parcel by number. `NotFound` when no row matches.
    fn get(&self, number: i64) -> RepoResult<Parcel>;
    /// Gets all parcels owned by `client`, empty when none match.
    fn get_by_client(&self, client: i64) -> RepoResult<Vec<Parcel>>;
    /// Sets the status text. Silent no-op when the number does not exist.
    fn set_status(&self, number: i64, status: &str) -> RepoResult<()>;
    /// Changes the address of a still-registered parcel.
    fn set_address(&self, number: i64, address: &str) -> RepoResult<()>;
    /// Removes a still-registered parcel.
    fn delete(&self, number: i64) -> RepoResult<()>;
}

/// SQLite-backed parcel repository.
///
/// Borrows a bootstrapped connection; lifecycle, pooling and isolation stay
/// with the caller and the storage engine.
pub struct SqliteParcelRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteParcelRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Shared precondition for address changes and deletion.
    ///
    /// Not atomic with the write that follows; see the module invariants.
    fn require_registered(&self, number: i64) -> RepoResult<()> {
        let status = self.current_status(number)?;
        if status != STATUS_REGISTERED {
            return Err(RepoError::NotRegistered { number, status });
        }
        Ok(())
    }

    fn current_status(&self, number: i64) -> RepoResult<String> {
        let mut stmt = self
            .conn
            .prepare("SELECT status FROM parcel WHERE number = ?1;")?;

        let mut rows = stmt.query(params![number])?;
        match rows.next()? {
            Some(row) => Ok(row.get(0)?),
            None => Err(RepoError::NotFound(number)),
        }
    }
}

impl ParcelRepository for SqliteParcelRepository<'_> {
    fn add(&self, parcel: &Parcel) -> RepoResult<i64> {
        self.conn.execute(
            "INSERT INTO parcel (
                client,
                status,
                address,
                created_at
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                parcel.client,
                parcel.status.as_str(),
                parcel.address.as_str(),
                parcel.created_at.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get(&self, number: i64) -> RepoResult<Parcel> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PARCEL_SELECT_SQL} WHERE number = ?1;"))?;

        let mut rows = stmt.query(params![number])?;
        match rows.next()? {
            Some(row) => parse_parcel_row(row),
            None => Err(RepoError::NotFound(number)),
        }
    }

    fn get_by_client(&self, client: i64) -> RepoResult<Vec<Parcel>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PARCEL_SELECT_SQL} WHERE client = ?1;"))?;

        let mut rows = stmt.query(params![client])?;
        let mut parcels = Vec::new();

        while let Some(row) = rows.next()? {
            parcels.push(parse_parcel_row(row)?);
        }

        Ok(parcels)
    }

    fn set_status(&self, number: i64, status: &str) -> RepoResult<()> {
        // Unguarded: the status text is free-form and a missing number is
        // not an error here.
        self.conn.execute(
            "UPDATE parcel SET status = ?1 WHERE number = ?2;",
            params![status, number],
        )?;

        Ok(())
    }

    fn set_address(&self, number: i64, address: &str) -> RepoResult<()> {
        self.require_registered(number)?;

        self.conn.execute(
            "UPDATE parcel SET address = ?1 WHERE number = ?2;",
            params![address, number],
        )?;

        Ok(())
    }

    fn delete(&self, number: i64) -> RepoResult<()> {
        self.require_registered(number)?;

        self.conn
            .execute("DELETE FROM parcel WHERE number = ?1;", params![number])?;

        Ok(())
    }
}

fn parse_parcel_row(row: &Row<'_>) -> RepoResult<Parcel> {
    Ok(Parcel {
        number: row.get("number")?,
        client: row.get("client")?,
        status: row.get("status")?,
        address: row.get("address")?,
        created_at: row.get("created_at")?,
    })
}
