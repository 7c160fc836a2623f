//! Sources, destinations and banks: the named records a transaction can refer to.
//!
//! This module contains:
//! - The `NamedRecord` model and the validated `RecordName`
//! - Database functions for creating and listing records per owner
//! - The form flow for adding a new record

mod db;
mod domain;
mod form;

pub use db::{
    RecordStore, SqliteRecordStore, create_record, create_record_tables, get_all_banks,
    get_records,
};
pub use domain::{
    Bank, Destination, NamedRecord, RecordId, RecordKind, RecordName, Source, find_duplicate,
};
pub use form::{ConfirmGate, ConfirmPrompt, CreateRecordForm};
