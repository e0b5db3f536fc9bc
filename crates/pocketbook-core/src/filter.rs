//! Selects transactions by period, date range, tag or text.

use chrono::NaiveDate;
use pocketbook_domain::{ExpenseTag, PeriodKey, Transaction};
use tracing::debug;

use crate::period::period_key_of;

/// Transactions dated inside `period`, in input order.
///
/// Transactions whose date does not parse never match.
pub fn filter_by_period<'a>(
    transactions: &'a [Transaction],
    period: &PeriodKey,
) -> Vec<&'a Transaction> {
    let mut skipped = 0usize;
    let matched = transactions
        .iter()
        .filter(|txn| match period_key_of(txn) {
            Some(key) => key == *period,
            None => {
                skipped += 1;
                false
            }
        })
        .collect();
    if skipped > 0 {
        debug!(period = %period, skipped, "skipped transactions with unparseable dates");
    }
    matched
}

/// Combined list filter: date bounds, a tag, and a description search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub tag: Option<ExpenseTag>,
    pub search: Option<String>,
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if self.date_from.is_some() || self.date_to.is_some() {
            let Some(date) = transaction.parsed_date() else {
                return false;
            };
            if self.date_from.is_some_and(|from| date < from) {
                return false;
            }
            if self.date_to.is_some_and(|to| date > to) {
                return false;
            }
        }
        if self.tag.is_some_and(|tag| tag != transaction.tag) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => {
                let needle = needle.to_lowercase();
                transaction
                    .description
                    .as_deref()
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
                    || transaction.tag.as_str().to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }

    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|txn| self.matches(txn)).collect()
    }
}
