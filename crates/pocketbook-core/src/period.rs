//! Maps calendar dates to period keys.

use chrono::NaiveDate;
use pocketbook_domain::{PeriodKey, Transaction};

/// Canonical period key for `date`. Pure and total for every valid date.
pub fn period_key(date: NaiveDate) -> PeriodKey {
    PeriodKey::from_date(date)
}

/// Period key of a transaction, or `None` when its date does not parse.
pub fn period_key_of(transaction: &Transaction) -> Option<PeriodKey> {
    transaction.parsed_date().map(period_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketbook_domain::{ExpenseTag, TransactionKind};

    #[test]
    fn every_day_of_a_month_shares_its_key() {
        let first = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let expected = period_key(first);
        for day in 1..=29 {
            let date = NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
            assert_eq!(period_key(date), expected);
        }
        assert_eq!(expected.to_string(), "2024-02");
        let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_ne!(period_key(march), expected);
    }

    #[test]
    fn same_month_different_year_differs() {
        let a = period_key(NaiveDate::from_ymd_opt(2023, 5, 10).unwrap());
        let b = period_key(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn unparseable_transaction_dates_have_no_key() {
        let txn = Transaction::new("t", TransactionKind::Expense, 5.0, "yesterday", ExpenseTag::Food);
        assert_eq!(period_key_of(&txn), None);
    }
}
