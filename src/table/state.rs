//! The state of a transaction table and the actions that change it.

use serde::Serialize;
use time::Date;

use crate::{
    balance::balance,
    config::TableConfig,
    filter::{AccountFilter, DateRange, FilterState, KindFilter, matches},
    pagination::{PageSize, page_count, page_indicators, page_window},
    table::{SortColumn, SortState, TableView, sort_rows},
    transaction::Transaction,
};

/// Something the user did to a table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction {
    /// Apply a (debounced) general search term.
    SetSearch(String),
    SetDateRange(DateRange),
    SetDescription(String),
    SetKind(KindFilter),
    /// Select or deselect a source.
    ToggleSource(String),
    /// Select or deselect a destination.
    ToggleDestination(String),
    ClearAxis,
    SetAmountAbove(f64),
    SetAmountBelow(f64),
    SetAmountEqual(f64),
    ClearAmounts,
    SetAccount(AccountFilter),
    /// Go back to the filter the table started with.
    ResetFilter,
    /// Click on a column header.
    SortBy(SortColumn),
    SetSort(SortState),
    SetPageSize(PageSize),
    SetPage(usize),
}

/// Everything that decides which transactions a table shows.
///
/// The state is never modified in place, [TableState::apply] returns the
/// state after an action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableState {
    #[serde(skip)]
    default_filter: FilterState,
    filter: FilterState,
    search: String,
    sort: SortState,
    page_size: PageSize,
    page: usize,
    #[serde(skip)]
    max_page_links: usize,
}

impl TableState {
    /// Create a table that starts out with `default_filter` on page one.
    pub fn new(default_filter: FilterState, config: &TableConfig) -> Self {
        Self {
            filter: default_filter.clone(),
            default_filter,
            search: String::new(),
            sort: SortState::default(),
            page_size: config.default_page_size,
            page: 1,
            max_page_links: config.max_page_links,
        }
    }

    /// Create a table showing everything from the `oldest` transaction up to
    /// `today`, or just today if there are no transactions.
    pub fn for_dates(oldest: Option<Date>, today: Date, config: &TableConfig) -> Self {
        let start = oldest.map_or(today, |oldest| oldest.min(today));

        Self::new(FilterState::with_date_range(start, today), config)
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn default_filter(&self) -> &FilterState {
        &self.default_filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// The state after `action`.
    ///
    /// Any change to the filter, search, sort or page size goes back to the
    /// first page.
    pub fn apply(self, action: TableAction) -> Self {
        match action {
            TableAction::SetSearch(search) => Self { search, ..self }.first_page(),
            TableAction::SetDateRange(range) => self.with_filter(|filter| FilterState {
                date_range: Some(range),
                ..filter
            }),
            TableAction::SetDescription(description) => {
                self.with_filter(|filter| FilterState {
                    description,
                    ..filter
                })
            }
            TableAction::SetKind(kind) => self.with_filter(|filter| FilterState { kind, ..filter }),
            TableAction::ToggleSource(name) => match self.filter.axis.toggle_source(&name) {
                Some(axis) => self.with_filter(|filter| FilterState { axis, ..filter }),
                None => {
                    tracing::debug!("Ignoring source {name} while destinations are selected");
                    self
                }
            },
            TableAction::ToggleDestination(name) => {
                match self.filter.axis.toggle_destination(&name) {
                    Some(axis) => self.with_filter(|filter| FilterState { axis, ..filter }),
                    None => {
                        tracing::debug!("Ignoring destination {name} while sources are selected");
                        self
                    }
                }
            }
            TableAction::ClearAxis => self.with_filter(|filter| FilterState {
                axis: Default::default(),
                ..filter
            }),
            TableAction::SetAmountAbove(above) => self.with_filter(|mut filter| {
                filter.amount.above = above;
                filter
            }),
            TableAction::SetAmountBelow(below) => self.with_filter(|mut filter| {
                filter.amount.below = below;
                filter
            }),
            TableAction::SetAmountEqual(equal) => self.with_filter(|mut filter| {
                filter.amount.equal = equal;
                filter
            }),
            TableAction::ClearAmounts => self.with_filter(|filter| FilterState {
                amount: Default::default(),
                ..filter
            }),
            TableAction::SetAccount(account) => {
                self.with_filter(|filter| FilterState { account, ..filter })
            }
            TableAction::ResetFilter => {
                let filter = self.default_filter.clone();
                self.with_filter(|_| filter)
            }
            TableAction::SortBy(column) => Self {
                sort: self.sort.clicked(column),
                ..self
            }
            .first_page(),
            TableAction::SetSort(sort) => Self { sort, ..self }.first_page(),
            TableAction::SetPageSize(page_size) => Self { page_size, ..self }.first_page(),
            TableAction::SetPage(page) => Self {
                page: page.max(1),
                ..self
            },
        }
    }

    fn with_filter(self, update: impl FnOnce(FilterState) -> FilterState) -> Self {
        let filter = update(self.filter);

        Self { filter, ..self }.first_page()
    }

    fn first_page(self) -> Self {
        Self { page: 1, ..self }
    }

    /// Filter, sort and page `transactions` for display.
    pub fn view<'a>(&self, transactions: &'a [Transaction]) -> TableView<'a> {
        let mut rows: Vec<&Transaction> = transactions
            .iter()
            .filter(|transaction| matches(transaction, &self.filter, &self.search))
            .collect();

        sort_rows(&mut rows, self.sort);

        let total_records = rows.len();
        let total_balance = balance(rows.iter().copied());
        let page_count = page_count(total_records, self.page_size);
        let rows = page_window(&rows, self.page, self.page_size).to_vec();

        TableView {
            rows,
            total_records,
            page: self.page,
            page_size: self.page_size,
            page_count,
            total_balance,
            indicators: page_indicators(self.page, page_count, self.max_page_links),
        }
    }
}
