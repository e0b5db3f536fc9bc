use std::{cmp::Reverse, sync::Arc};

use chrono::NaiveDate;
use pocketbook_core::{filter_by_period, CoreError, ExpenseStore, TransactionFilter};
use pocketbook_domain::{parse_transaction_date, NewTransaction, PeriodKey, Transaction};
use tracing::info;

use super::{ensure_positive, ServiceError, ServiceResult};

/// Records, removes and lists transactions.
pub struct TransactionService {
    store: Arc<dyn ExpenseStore>,
}

impl TransactionService {
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }

    /// Parses user-entered dates, accepting the same formats stored records use.
    pub fn parse_date(raw: &str) -> ServiceResult<NaiveDate> {
        parse_transaction_date(raw)
            .ok_or_else(|| ServiceError::Invalid(format!("unrecognized date `{}`", raw.trim())))
    }

    pub fn add(&self, payload: NewTransaction) -> ServiceResult<Transaction> {
        ensure_positive(payload.amount, "amount")?;
        let stored = self.store.add_transaction(payload)?;
        info!(id = %stored.id, kind = %stored.kind, amount = stored.amount, "transaction added");
        Ok(stored)
    }

    pub fn delete(&self, id: &str) -> ServiceResult<()> {
        if self.store.delete_transaction(id)? {
            info!(id, "transaction deleted");
            Ok(())
        } else {
            Err(CoreError::TransactionNotFound(id.to_string()).into())
        }
    }

    /// Transactions dated inside `period`, newest first.
    pub fn list_for_period(&self, period: &PeriodKey) -> ServiceResult<Vec<Transaction>> {
        let all = self.store.list_transactions()?;
        Ok(newest_first(filter_by_period(&all, period)))
    }

    /// Every transaction matching `filter`, newest first.
    pub fn search(&self, filter: &TransactionFilter) -> ServiceResult<Vec<Transaction>> {
        let all = self.store.list_transactions()?;
        Ok(newest_first(filter.apply(&all)))
    }
}

/// Orders by date descending; undated records sink to the end. Stable for equal dates.
pub(crate) fn newest_first(transactions: Vec<&Transaction>) -> Vec<Transaction> {
    let mut sorted: Vec<Transaction> = transactions.into_iter().cloned().collect();
    sorted.sort_by_key(|txn| Reverse(txn.parsed_date()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketbook_domain::{ExpenseTag, TransactionKind};

    #[test]
    fn newest_first_sinks_undated_records() {
        let txns = vec![
            Transaction::new("a", TransactionKind::Expense, 1.0, "2024-03-01", ExpenseTag::Food),
            Transaction::new("b", TransactionKind::Expense, 1.0, "soon", ExpenseTag::Food),
            Transaction::new("c", TransactionKind::Expense, 1.0, "2024-03-09", ExpenseTag::Food),
            Transaction::new("d", TransactionKind::Expense, 1.0, "2024-03-01", ExpenseTag::Fuel),
        ];
        let ids: Vec<String> = newest_first(txns.iter().collect())
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["c", "a", "d", "b"]);
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(TransactionService::parse_date("2024-03-05").is_ok());
        assert!(matches!(
            TransactionService::parse_date("tomorrow"),
            Err(ServiceError::Invalid(_))
        ));
    }
}
