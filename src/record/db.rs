//! Database operations for sources, destinations and banks.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    email::Email,
    record::{NamedRecord, RecordKind, RecordName},
};

/// Create a record owned by `email` and return it with its generated ID.
///
/// # Errors
/// This function will return a:
/// - [Error::DuplicateRecordName] if a source or destination with the same name (ignoring case) already exists for `email`,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_record(
    kind: RecordKind,
    name: RecordName,
    email: &Email,
    connection: &Connection,
) -> Result<NamedRecord, Error> {
    let query = format!(
        "INSERT INTO {} (name, email) VALUES (?1, ?2);",
        kind.table_name()
    );

    connection
        .execute(&query, (name.as_ref(), email.as_ref()))
        .map_err(|error| match error {
            rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error {
                    code: _,
                    extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE,
                },
                _,
            ) => Error::DuplicateRecordName(kind, name.to_string()),
            error => error.into(),
        })?;

    let id = connection.last_insert_rowid();

    Ok(NamedRecord {
        id,
        name,
        email: email.clone(),
    })
}

/// Retrieve all records of `kind` owned by `email` in the order they were created.
pub fn get_records(
    kind: RecordKind,
    email: &Email,
    connection: &Connection,
) -> Result<Vec<NamedRecord>, Error> {
    let query = format!(
        "SELECT id, name, email FROM {} WHERE email = ?1 ORDER BY id ASC;",
        kind.table_name()
    );

    connection
        .prepare(&query)?
        .query_map([email.as_ref()], map_row)?
        .map(|maybe_record| maybe_record.map_err(|error| error.into()))
        .collect()
}

/// Retrieve the banks of every user, ordered by ID.
pub fn get_all_banks(connection: &Connection) -> Result<Vec<NamedRecord>, Error> {
    connection
        .prepare("SELECT id, name, email FROM bank ORDER BY id ASC;")?
        .query_map([], map_row)?
        .map(|maybe_record| maybe_record.map_err(|error| error.into()))
        .collect()
}

/// Initialize the source, destination and bank tables.
///
/// Source and destination names are unique per owner, ignoring case.
pub fn create_record_tables(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS source (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            UNIQUE(email, name COLLATE NOCASE)
        );

        CREATE TABLE IF NOT EXISTS destination (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            UNIQUE(email, name COLLATE NOCASE)
        );

        CREATE TABLE IF NOT EXISTS bank (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_source_email ON source(email);
        CREATE INDEX IF NOT EXISTS idx_destination_email ON destination(email);
        CREATE INDEX IF NOT EXISTS idx_bank_email ON bank(email);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<NamedRecord, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let raw_email: String = row.get(2)?;

    Ok(NamedRecord {
        id,
        name: RecordName::new_unchecked(&raw_name),
        email: Email::new_unchecked(&raw_email),
    })
}

/// Somewhere new records are written to.
///
/// Failures are returned as errors so the form can tell the user.
pub trait RecordStore {
    /// Persist a new record of `kind` called `name` for the store's owner.
    fn create_record(
        &self,
        kind: RecordKind,
        name: RecordName,
    ) -> impl Future<Output = Result<NamedRecord, Error>>;
}

/// A [RecordStore] that writes to SQLite on behalf of a single owner.
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    /// The database connection for managing records.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The owner of the records written by this store.
    pub owner: Email,
}

impl SqliteRecordStore {
    pub fn new(db_connection: Arc<Mutex<Connection>>, owner: Email) -> Self {
        Self {
            db_connection,
            owner,
        }
    }
}

impl RecordStore for SqliteRecordStore {
    async fn create_record(
        &self,
        kind: RecordKind,
        name: RecordName,
    ) -> Result<NamedRecord, Error> {
        let connection = self.db_connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })?;

        create_record(kind, name, &self.owner, &connection)
    }
}
