use serde::Serialize;

use crate::{
    pagination::{PageIndicator, PageSize},
    transaction::Transaction,
};

/// The page of a table that is shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView<'a> {
    /// The rows on the current page.
    pub rows: Vec<&'a Transaction>,
    /// The number of transactions that passed the filters, across all pages.
    pub total_records: usize,
    pub page: usize,
    pub page_size: PageSize,
    pub page_count: usize,
    /// The balance of every transaction that passed the filters.
    pub total_balance: f64,
    pub indicators: Vec<PageIndicator>,
}
