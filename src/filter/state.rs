//! The filter settings of a transaction table.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::transaction::TransactionKind;

/// An inclusive range of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Whether `date` is within the range, including both ends.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Which transaction kind (jenis) to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KindFilter {
    /// Show both income and expenses (SEMUA).
    #[default]
    All,
    Only(TransactionKind),
}

/// Whether to narrow transactions down by their source or by their
/// destination.
///
/// Only one of the two can be active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterAxis {
    #[default]
    None,
    /// Only show transactions from one of these sources.
    BySource(BTreeSet<String>),
    /// Only show transactions to one of these destinations.
    ByDestination(BTreeSet<String>),
}

impl FilterAxis {
    /// Add `name` to the selected sources, or remove it if it is already selected.
    ///
    /// Returns `None` if destinations are selected, since the two cannot be
    /// combined.
    pub fn toggle_source(&self, name: &str) -> Option<Self> {
        match self {
            Self::None => Some(Self::BySource(BTreeSet::from([name.to_owned()]))),
            Self::BySource(names) => Some(toggle(names, name, Self::BySource)),
            Self::ByDestination(_) => None,
        }
    }

    /// Add `name` to the selected destinations, or remove it if it is already selected.
    ///
    /// Returns `None` if sources are selected, since the two cannot be
    /// combined.
    pub fn toggle_destination(&self, name: &str) -> Option<Self> {
        match self {
            Self::None => Some(Self::ByDestination(BTreeSet::from([name.to_owned()]))),
            Self::ByDestination(names) => Some(toggle(names, name, Self::ByDestination)),
            Self::BySource(_) => None,
        }
    }
}

fn toggle(
    names: &BTreeSet<String>,
    name: &str,
    make_axis: fn(BTreeSet<String>) -> FilterAxis,
) -> FilterAxis {
    let mut names = names.clone();

    if !names.remove(name) {
        names.insert(name.to_owned());
    }

    if names.is_empty() {
        FilterAxis::None
    } else {
        make_axis(names)
    }
}

/// Bounds on the transaction amount (nominal).
///
/// A threshold of zero (or less) is inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AmountFilter {
    /// Only show amounts strictly greater than this (di atas).
    pub above: f64,
    /// Only show amounts strictly less than this (di bawah).
    pub below: f64,
    /// Only show amounts exactly equal to this (sama dengan).
    pub equal: f64,
}

impl AmountFilter {
    pub fn is_active(&self) -> bool {
        self.above > 0.0 || self.below > 0.0 || self.equal > 0.0
    }
}

/// Whether to show bank transactions, cash transactions or both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountFilter {
    /// Show everything (SEMUA).
    #[default]
    All,
    /// Only transactions that went through a bank account.
    Bank,
    /// Only cash transactions.
    Cash,
}

/// Every filter that can be applied to a transaction table.
///
/// The default lets every transaction through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// The dates to show, `None` for all dates.
    pub date_range: Option<DateRange>,
    /// Only show transactions whose description contains this text, ignoring case.
    pub description: String,
    pub kind: KindFilter,
    pub axis: FilterAxis,
    pub amount: AmountFilter,
    pub account: AccountFilter,
}

impl FilterState {
    /// The filter a table starts with: everything between `start` and `end`.
    pub fn with_date_range(start: Date, end: Date) -> Self {
        Self {
            date_range: Some(DateRange::new(start, end)),
            ..Self::default()
        }
    }
}
