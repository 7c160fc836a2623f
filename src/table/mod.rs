//! The transaction table controller: a pure reducer over [TableState] and
//! the filter, sort and page pipeline that turns it into a [TableView].

mod sort;
mod state;
mod view;

pub use sort::{SortColumn, SortDirection, SortState, compare, sort_rows};
pub use state::{TableAction, TableState};
pub use view::TableView;
