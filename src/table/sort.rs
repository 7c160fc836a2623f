//! Sorting of table rows by a chosen column.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// The columns of a transaction table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    /// The row number given when the transactions were loaded.
    #[default]
    No,
    Date,
    Description,
    Kind,
    Source,
    Destination,
    Amount,
    Bank,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// The column a table is sorted by and in which direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// The sort after clicking on the header of `column`.
    ///
    /// Clicking the current column flips the direction, any other column
    /// starts out ascending.
    pub fn clicked(self, column: SortColumn) -> Self {
        if column == self.column {
            Self::new(column, self.direction.flipped())
        } else {
            Self::new(column, SortDirection::Asc)
        }
    }
}

/// Compare two transactions on `column` in ascending order.
///
/// Text is compared as is, so upper case sorts before lower case. Missing
/// names sort first.
pub fn compare(a: &Transaction, b: &Transaction, column: SortColumn) -> Ordering {
    match column {
        SortColumn::No => a.no.cmp(&b.no),
        SortColumn::Date => a.date.cmp(&b.date),
        SortColumn::Description => a.description.cmp(&b.description),
        SortColumn::Kind => a.kind.cmp(&b.kind),
        SortColumn::Source => a.source.cmp(&b.source),
        SortColumn::Destination => a.destination.cmp(&b.destination),
        SortColumn::Amount => a.amount.total_cmp(&b.amount),
        SortColumn::Bank => a.bank_id.cmp(&b.bank_id),
    }
}

/// Sort `rows` in place.
///
/// Rows are stably sorted in ascending order, and a descending sort reverses
/// that result, ties included.
pub fn sort_rows(rows: &mut [&Transaction], sort: SortState) {
    rows.sort_by(|a, b| compare(a, b, sort.column));

    if sort.direction == SortDirection::Desc {
        rows.reverse();
    }
}
