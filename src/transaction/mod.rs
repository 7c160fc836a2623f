//! Transaction management.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - Database functions for storing and querying transactions

mod core;
mod db;

pub use core::{Transaction, TransactionBuilder, TransactionId, TransactionKind};
pub use db::{
    create_transaction, create_transaction_table, get_all_bank_transactions,
    get_oldest_transaction_date, get_transactions,
};
