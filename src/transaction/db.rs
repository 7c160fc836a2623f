//! Database functions for storing and querying transactions.
//!
//! Rows are validated as they are read so the rest of the crate can trust
//! the kind and amount of every [Transaction].

use rusqlite::{Connection, Params, Row};
use time::Date;

use crate::{
    Error,
    email::Email,
    record::RecordId,
    transaction::core::{Transaction, TransactionBuilder, TransactionId, validate_amount},
};

/// Create a new transaction owned by `email` in the database from a builder.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidAmount] if the amount is negative or not a finite number,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_transaction(
    builder: TransactionBuilder,
    email: &Email,
    connection: &Connection,
) -> Result<TransactionId, Error> {
    let builder = builder.validate()?;

    connection.execute(
        "INSERT INTO \"transaction\"
            (date, description, kind, amount, source_id, destination_id, bank_id, email)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        (
            builder.date,
            builder.description,
            builder.kind.as_str(),
            builder.amount,
            builder.source_id,
            builder.destination_id,
            builder.bank_id,
            email.as_ref(),
        ),
    )?;

    Ok(connection.last_insert_rowid())
}

/// Get the transactions owned by `email`, newest first, with source and destination names.
///
/// `no` is the 1-based position in the returned list.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidTransactionKind] or [Error::InvalidAmount] if a stored row is malformed,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_transactions(email: &Email, connection: &Connection) -> Result<Vec<Transaction>, Error> {
    query_transactions(
        &format!("{SELECT_TRANSACTIONS} WHERE t.email = ?1 {ORDER_NEWEST_FIRST}"),
        [email.as_ref()],
        connection,
    )
}

/// Get the transactions of every user that went through a bank account.
///
/// # Errors
/// See [get_transactions].
pub fn get_all_bank_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    query_transactions(
        &format!("{SELECT_TRANSACTIONS} WHERE t.bank_id IS NOT NULL {ORDER_NEWEST_FIRST}"),
        [],
        connection,
    )
}

/// Get the date of the oldest transaction owned by `email`.
///
/// Returns `None` if the user has no transactions.
pub fn get_oldest_transaction_date(
    email: &Email,
    connection: &Connection,
) -> Result<Option<Date>, Error> {
    connection
        .query_row(
            "SELECT MIN(date) FROM \"transaction\" WHERE email = ?1",
            [email.as_ref()],
            |row| row.get(0),
        )
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id INTEGER PRIMARY KEY,
            date TEXT NOT NULL,
            description TEXT NOT NULL,
            kind TEXT NOT NULL,
            amount REAL NOT NULL,
            source_id INTEGER,
            destination_id INTEGER,
            bank_id INTEGER,
            email TEXT NOT NULL,
            FOREIGN KEY(source_id) REFERENCES source(id) ON UPDATE CASCADE ON DELETE SET NULL,
            FOREIGN KEY(destination_id) REFERENCES destination(id) ON UPDATE CASCADE ON DELETE SET NULL,
            FOREIGN KEY(bank_id) REFERENCES bank(id) ON UPDATE CASCADE ON DELETE SET NULL
        );

        CREATE INDEX IF NOT EXISTS idx_transaction_email_date ON \"transaction\"(email, date);",
    )?;

    Ok(())
}

const SELECT_TRANSACTIONS: &str = "SELECT t.id, t.date, t.description, t.kind, \
    source.name, destination.name, t.amount, t.bank_id \
    FROM \"transaction\" t \
    LEFT JOIN source ON t.source_id = source.id \
    LEFT JOIN destination ON t.destination_id = destination.id";

// Sort by date, and then ID to keep the order stable for transactions on the same day.
const ORDER_NEWEST_FIRST: &str = "ORDER BY t.date DESC, t.id DESC";

/// A transaction row as stored, before its kind and amount are checked.
struct TransactionRow {
    id: TransactionId,
    date: Date,
    description: String,
    kind: String,
    source: Option<String>,
    destination: Option<String>,
    amount: f64,
    bank_id: Option<RecordId>,
}

impl TransactionRow {
    fn validate(self, no: usize) -> Result<Transaction, Error> {
        Ok(Transaction {
            id: self.id,
            no,
            date: self.date,
            description: self.description,
            kind: self.kind.parse()?,
            source: self.source,
            destination: self.destination,
            amount: validate_amount(self.amount)?,
            bank_id: self.bank_id,
        })
    }
}

fn map_row(row: &Row) -> Result<TransactionRow, rusqlite::Error> {
    Ok(TransactionRow {
        id: row.get(0)?,
        date: row.get(1)?,
        description: row.get(2)?,
        kind: row.get(3)?,
        source: row.get(4)?,
        destination: row.get(5)?,
        amount: row.get(6)?,
        bank_id: row.get(7)?,
    })
}

fn query_transactions<P: Params>(
    query: &str,
    params: P,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    let rows = connection
        .prepare(query)?
        .query_map(params, map_row)?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| row.validate(index + 1))
        .collect()
}
