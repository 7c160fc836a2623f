//! Saldo is the core of a personal finance tracker.
//!
//! Transactions move money between named sources and destinations, either
//! in cash or through a bank account. This library provides:
//!
//! - the [balance] aggregator, which derives bank balances and per-owner
//!   totals from transactions,
//! - the [filter] predicates and the debounced general search,
//! - the [table] controller, a pure reducer that filters, sorts and pages
//!   transactions for display,
//! - the [record] creation forms with their duplicate check, confirmation
//!   and awaited write,
//! - SQLite persistence for records and transactions.

pub mod alert;
pub mod balance;
pub mod config;
pub mod currency;
pub mod db;
pub mod email;
mod error;
pub mod filter;
pub mod pagination;
pub mod record;
pub mod table;
pub mod timezone;
pub mod transaction;

#[cfg(test)]
mod test_utils;

pub use db::initialize as initialize_db;
pub use email::Email;
pub use error::Error;
