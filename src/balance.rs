//! Balance (saldo) calculations for banks and their owners.
//!
//! Balances are never stored, they are derived from transactions: income
//! adds its amount and expenses subtract theirs.

use serde::Serialize;

use crate::{email::Email, record::Bank, transaction::Transaction};

/// The net balance of `transactions`, zero if there are none.
pub fn balance<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> f64 {
    transactions
        .into_iter()
        .map(Transaction::signed_amount)
        .sum()
}

/// A bank paired with the balance of the transactions that went through it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankBalance {
    pub bank: Bank,
    pub balance: f64,
}

/// The banks of one owner and their combined balance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnerBalances {
    pub email: Email,
    pub banks: Vec<BankBalance>,
    /// The sum of the balances in `banks`.
    pub total_balance: f64,
}

/// Calculate the balance of every bank in `banks`, keeping their order.
///
/// Each bank only counts the transactions in `transactions` that refer to it.
pub fn bank_balances(banks: &[Bank], transactions: &[Transaction]) -> Vec<BankBalance> {
    banks
        .iter()
        .map(|bank| BankBalance {
            bank: bank.clone(),
            balance: balance(
                transactions
                    .iter()
                    .filter(|transaction| transaction.bank_id == Some(bank.id)),
            ),
        })
        .collect()
}

/// Group bank balances by owner, in the order each owner first appears.
///
/// The total of each group only includes that owner's banks.
pub fn group_by_owner(bank_balances: Vec<BankBalance>) -> Vec<OwnerBalances> {
    let mut groups: Vec<OwnerBalances> = Vec::new();

    for bank_balance in bank_balances {
        let group = match groups
            .iter()
            .position(|group| group.email == bank_balance.bank.email)
        {
            Some(index) => &mut groups[index],
            None => {
                groups.push(OwnerBalances {
                    email: bank_balance.bank.email.clone(),
                    banks: Vec::new(),
                    total_balance: 0.0,
                });
                groups.last_mut().expect("group just added")
            }
        };

        group.total_balance += bank_balance.balance;
        group.banks.push(bank_balance);
    }

    groups
}

/// Calculate bank balances and group them by owner.
pub fn owner_balances(banks: &[Bank], transactions: &[Transaction]) -> Vec<OwnerBalances> {
    group_by_owner(bank_balances(banks, transactions))
}
