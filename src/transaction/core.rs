//! Defines the core data models for transactions.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, record::RecordId};

/// Database identifier for a transaction.
pub type TransactionId = i64;

/// Whether money was earned or spent (jenis).
///
/// Income sorts before expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "INCOME", alias = "PEMASUKAN")]
    Income,
    #[serde(rename = "EXPENSE", alias = "PENGELUARAN")]
    Expense,
}

impl TransactionKind {
    /// The value stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }

    /// `1.0` for income and `-1.0` for expenses.
    pub fn sign(self) -> f64 {
        match self {
            Self::Income => 1.0,
            Self::Expense => -1.0,
        }
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    /// Parse a kind, ignoring case.
    ///
    /// Both the English and Indonesian names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INCOME" | "PEMASUKAN" => Ok(Self::Income),
            "EXPENSE" | "PENGELUARAN" => Ok(Self::Expense),
            _ => Err(Error::InvalidTransactionKind(s.to_owned())),
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An income or expense as shown in a transaction table.
///
/// Source and destination are joined in by name since that is what the
/// table displays and filters on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The 1-based position of the transaction in the list it was fetched in.
    pub no: usize,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for (keterangan).
    pub description: String,
    pub kind: TransactionKind,
    /// The name of where the money came from, if any.
    pub source: Option<String>,
    /// The name of where the money went, if any.
    pub destination: Option<String>,
    /// The non-negative amount of money (nominal), the direction is given by `kind`.
    pub amount: f64,
    /// The bank account the transaction went through, `None` for cash.
    pub bank_id: Option<RecordId>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        kind: TransactionKind,
        amount: f64,
        date: Date,
        description: &str,
    ) -> TransactionBuilder {
        TransactionBuilder {
            kind,
            amount,
            date,
            description: description.to_owned(),
            source_id: None,
            destination_id: None,
            bank_id: None,
        }
    }

    /// Whether the transaction went through a bank account rather than cash.
    pub fn is_bank_account(&self) -> bool {
        self.bank_id.is_some()
    }

    /// The amount with the sign of its kind: positive for income, negative for expenses.
    pub fn signed_amount(&self) -> f64 {
        self.kind.sign() * self.amount
    }
}

/// A builder for creating new transactions in the database.
///
/// # Examples
///
/// ```ignore
/// use time::macros::date;
///
/// use crate::transaction::{Transaction, TransactionKind};
///
/// let builder = Transaction::build(
///         TransactionKind::Expense,
///         45_000.0,
///         date!(2025 - 01 - 15),
///         "Makan siang",
///     )
///     .destination_id(Some(3))
///     .bank_id(Some(1));
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    pub kind: TransactionKind,

    /// The non-negative amount of the transaction.
    ///
    /// Checked by [TransactionBuilder::validate] before the transaction is
    /// stored.
    pub amount: f64,

    /// The date when the transaction occurred.
    pub date: Date,

    /// A human-readable description of the transaction.
    pub description: String,

    /// The source the money came from.
    pub source_id: Option<RecordId>,

    /// The destination the money went to.
    pub destination_id: Option<RecordId>,

    /// The bank account the money moved through, `None` for cash.
    pub bank_id: Option<RecordId>,
}

impl TransactionBuilder {
    /// Set the source for the transaction.
    pub fn source_id(mut self, source_id: Option<RecordId>) -> Self {
        self.source_id = source_id;
        self
    }

    /// Set the destination for the transaction.
    pub fn destination_id(mut self, destination_id: Option<RecordId>) -> Self {
        self.destination_id = destination_id;
        self
    }

    /// Set the bank for the transaction.
    pub fn bank_id(mut self, bank_id: Option<RecordId>) -> Self {
        self.bank_id = bank_id;
        self
    }

    /// Check the amount is a finite, non-negative number.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] otherwise.
    pub fn validate(self) -> Result<Self, Error> {
        validate_amount(self.amount)?;

        Ok(self)
    }
}

pub(crate) fn validate_amount(amount: f64) -> Result<f64, Error> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(Error::InvalidAmount(amount))
    }
}
