//! Filtering of the transaction table: the filter settings, the predicates
//! built from them and the debounced general search.

mod predicate;
mod search;
mod state;

pub use predicate::{
    matches, matches_account, matches_amount, matches_date, matches_description,
    matches_destination, matches_kind, matches_search, matches_source,
};
pub use search::{DEFAULT_SEARCH_DELAY, DebouncedSearch};
pub use state::{AccountFilter, AmountFilter, DateRange, FilterAxis, FilterState, KindFilter};
