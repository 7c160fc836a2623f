//! Helpers for building test data.

use time::Date;

use crate::transaction::{Transaction, TransactionKind};

/// A cash transaction with no source, destination or description.
///
/// `no` is set to `id` so tests can tell the original order apart.
pub fn transaction(id: i64, date: Date, kind: TransactionKind, amount: f64) -> Transaction {
    Transaction {
        id,
        no: id as usize,
        date,
        description: String::new(),
        kind,
        source: None,
        destination: None,
        amount,
        bank_id: None,
    }
}

/// Builder-style helpers for tweaking a test transaction.
pub trait TransactionExt {
    fn description(self, description: &str) -> Self;
    fn source(self, source: &str) -> Self;
    fn destination(self, destination: &str) -> Self;
    fn bank(self, bank_id: i64) -> Self;
}

impl TransactionExt for Transaction {
    fn description(self, description: &str) -> Self {
        Self {
            description: description.to_owned(),
            ..self
        }
    }

    fn source(self, source: &str) -> Self {
        Self {
            source: Some(source.to_owned()),
            ..self
        }
    }

    fn destination(self, destination: &str) -> Self {
        Self {
            destination: Some(destination.to_owned()),
            ..self
        }
    }

    fn bank(self, bank_id: i64) -> Self {
        Self {
            bank_id: Some(bank_id),
            ..self
        }
    }
}
