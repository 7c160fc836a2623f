//! The predicates a transaction must pass to be shown in a table.
//!
//! Each predicate checks one part of the filter and lets everything through
//! when that part is inactive. [matches] combines them with AND.

use crate::{
    filter::{AccountFilter, FilterAxis, FilterState, KindFilter},
    transaction::Transaction,
};

/// Whether the transaction passes every filter and the general search `term`.
pub fn matches(transaction: &Transaction, filter: &FilterState, term: &str) -> bool {
    matches_search(transaction, term)
        && matches_date(transaction, filter)
        && matches_description(transaction, filter)
        && matches_kind(transaction, filter)
        && matches_source(transaction, filter)
        && matches_destination(transaction, filter)
        && matches_amount(transaction, filter)
        && matches_account(transaction, filter)
}

/// The general search: `term` appears in the description, source,
/// destination or kind, ignoring case. A blank term matches everything.
pub fn matches_search(transaction: &Transaction, term: &str) -> bool {
    let term = term.trim();

    if term.is_empty() {
        return true;
    }

    let term = term.to_lowercase();

    [
        Some(transaction.description.as_str()),
        transaction.source.as_deref(),
        transaction.destination.as_deref(),
        Some(transaction.kind.as_str()),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&term))
}

pub fn matches_date(transaction: &Transaction, filter: &FilterState) -> bool {
    filter
        .date_range
        .is_none_or(|range| range.contains(transaction.date))
}

pub fn matches_description(transaction: &Transaction, filter: &FilterState) -> bool {
    filter.description.is_empty()
        || transaction
            .description
            .to_lowercase()
            .contains(&filter.description.to_lowercase())
}

pub fn matches_kind(transaction: &Transaction, filter: &FilterState) -> bool {
    match filter.kind {
        KindFilter::All => true,
        KindFilter::Only(kind) => transaction.kind == kind,
    }
}

/// A transaction without a source never matches a source selection.
pub fn matches_source(transaction: &Transaction, filter: &FilterState) -> bool {
    match &filter.axis {
        FilterAxis::BySource(names) => transaction
            .source
            .as_ref()
            .is_some_and(|source| names.contains(source)),
        _ => true,
    }
}

/// A transaction without a destination never matches a destination selection.
pub fn matches_destination(transaction: &Transaction, filter: &FilterState) -> bool {
    match &filter.axis {
        FilterAxis::ByDestination(names) => transaction
            .destination
            .as_ref()
            .is_some_and(|destination| names.contains(destination)),
        _ => true,
    }
}

/// Excludes amounts at or under `above`, at or over `below`, and different
/// from `equal`, each only when the threshold is positive.
pub fn matches_amount(transaction: &Transaction, filter: &FilterState) -> bool {
    let amount = transaction.amount;
    let bounds = filter.amount;

    !((bounds.above > 0.0 && amount <= bounds.above)
        || (bounds.below > 0.0 && amount >= bounds.below)
        || (bounds.equal > 0.0 && amount != bounds.equal))
}

pub fn matches_account(transaction: &Transaction, filter: &FilterState) -> bool {
    match filter.account {
        AccountFilter::All => true,
        AccountFilter::Bank => transaction.is_bank_account(),
        AccountFilter::Cash => !transaction.is_bank_account(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use time::macros::date;

    use crate::{
        filter::{
            AccountFilter, AmountFilter, DateRange, FilterAxis, FilterState, KindFilter, matches,
            matches_account, matches_amount, matches_date, matches_description,
            matches_destination, matches_kind, matches_search, matches_source,
        },
        test_utils::{TransactionExt, transaction},
        transaction::{
            Transaction,
            TransactionKind::{Expense, Income},
        },
    };

    fn sample() -> Vec<Transaction> {
        vec![
            transaction(1, date!(2025 - 01 - 01), Income, 5_000_000.0)
                .description("Gaji Januari")
                .source("Kantor")
                .bank(1),
            transaction(2, date!(2025 - 01 - 05), Expense, 25_000.0)
                .description("Makan siang")
                .destination("Warung"),
            transaction(3, date!(2025 - 01 - 10), Expense, 150_000.0)
                .description("Belanja bulanan")
                .destination("Pasar")
                .bank(1),
            transaction(4, date!(2025 - 02 - 01), Income, 100_000.0)
                .description("Hadiah")
                .source("Keluarga"),
        ]
    }

    fn filter_ids(filter: &FilterState, term: &str) -> Vec<i64> {
        sample()
            .iter()
            .filter(|transaction| matches(transaction, filter, term))
            .map(|transaction| transaction.id)
            .collect()
    }

    fn names(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| (*name).to_owned()).collect()
    }

    #[test]
    fn default_filter_passes_everything() {
        let filter = FilterState::default();

        assert_eq!(filter_ids(&filter, ""), [1, 2, 3, 4]);
    }

    #[test]
    fn search_ignores_case_and_checks_names() {
        let filter = FilterState::default();

        assert_eq!(filter_ids(&filter, "GAJI"), [1]);
        assert_eq!(filter_ids(&filter, "warung"), [2]);
        assert_eq!(filter_ids(&filter, "expense"), [2, 3]);
        assert_eq!(filter_ids(&filter, "  "), [1, 2, 3, 4]);
    }

    #[test]
    fn search_without_match_is_empty() {
        assert!(!matches_search(&sample()[0], "listrik"));
        assert!(filter_ids(&FilterState::default(), "listrik").is_empty());
    }

    #[test]
    fn date_range_is_inclusive() {
        let filter = FilterState::with_date_range(date!(2025 - 01 - 05), date!(2025 - 01 - 10));

        assert_eq!(filter_ids(&filter, ""), [2, 3]);
        assert!(matches_date(&sample()[1], &filter));
        assert!(!matches_date(&sample()[3], &filter));
    }

    #[test]
    fn description_ignores_case() {
        let filter = FilterState {
            description: "SIANG".to_owned(),
            ..FilterState::default()
        };

        assert!(matches_description(&sample()[1], &filter));
        assert_eq!(filter_ids(&filter, ""), [2]);
    }

    #[test]
    fn kind_filter() {
        let filter = FilterState {
            kind: KindFilter::Only(Income),
            ..FilterState::default()
        };

        assert!(matches_kind(&sample()[0], &filter));
        assert_eq!(filter_ids(&filter, ""), [1, 4]);
    }

    #[test]
    fn source_filter_excludes_transactions_without_source() {
        let filter = FilterState {
            axis: FilterAxis::BySource(names(&["Kantor", "Keluarga"])),
            ..FilterState::default()
        };

        assert!(!matches_source(&sample()[1], &filter));
        assert!(matches_destination(&sample()[1], &filter));
        assert_eq!(filter_ids(&filter, ""), [1, 4]);
    }

    #[test]
    fn destination_filter() {
        let filter = FilterState {
            axis: FilterAxis::ByDestination(names(&["Pasar"])),
            ..FilterState::default()
        };

        assert_eq!(filter_ids(&filter, ""), [3]);
    }

    #[test]
    fn amount_above_is_strict() {
        let filter = FilterState {
            amount: AmountFilter {
                above: 100_000.0,
                ..AmountFilter::default()
            },
            ..FilterState::default()
        };

        assert!(!matches_amount(&sample()[3], &filter));
        assert_eq!(filter_ids(&filter, ""), [1, 3]);
    }

    #[test]
    fn amount_below_is_strict() {
        let filter = FilterState {
            amount: AmountFilter {
                below: 150_000.0,
                ..AmountFilter::default()
            },
            ..FilterState::default()
        };

        assert_eq!(filter_ids(&filter, ""), [2, 4]);
    }

    #[test]
    fn amount_equal() {
        let filter = FilterState {
            amount: AmountFilter {
                equal: 25_000.0,
                ..AmountFilter::default()
            },
            ..FilterState::default()
        };

        assert_eq!(filter_ids(&filter, ""), [2]);
    }

    #[test]
    fn amount_bounds_combine() {
        let filter = FilterState {
            amount: AmountFilter {
                above: 20_000.0,
                below: 200_000.0,
                equal: 0.0,
            },
            ..FilterState::default()
        };

        assert_eq!(filter_ids(&filter, ""), [2, 3, 4]);
    }

    #[test]
    fn account_filter() {
        let bank = FilterState {
            account: AccountFilter::Bank,
            ..FilterState::default()
        };
        let cash = FilterState {
            account: AccountFilter::Cash,
            ..FilterState::default()
        };

        assert!(matches_account(&sample()[0], &bank));
        assert_eq!(filter_ids(&bank, ""), [1, 3]);
        assert_eq!(filter_ids(&cash, ""), [2, 4]);
    }

    #[test]
    fn every_predicate_must_pass() {
        let filter = FilterState {
            kind: KindFilter::Only(Expense),
            account: AccountFilter::Bank,
            date_range: Some(DateRange::new(date!(2025 - 01 - 01), date!(2025 - 01 - 31))),
            ..FilterState::default()
        };

        assert_eq!(filter_ids(&filter, ""), [3]);
        assert!(filter_ids(&filter, "warung").is_empty());
    }
}
