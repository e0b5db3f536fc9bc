//! Composes per-month statistics from transactions and a budget record.

use pocketbook_domain::{BudgetRecord, MonthlyStats, PeriodKey, Transaction, TransactionKind};
use tracing::debug;

use crate::{aggregate::sum_by_kind, filter::filter_by_period};

/// Builds the statistics for `period` out of the full transaction list.
///
/// `income` is the explicit income target; when it is not a positive number
/// the income derived from the period's transactions is used instead.
pub fn monthly_stats(
    all_transactions: &[Transaction],
    period: &PeriodKey,
    budget: f64,
    income: f64,
) -> MonthlyStats {
    let in_period = filter_by_period(all_transactions, period);
    let expenses = sum_by_kind(in_period.iter().copied(), TransactionKind::Expense);
    let computed_income = sum_by_kind(in_period.iter().copied(), TransactionKind::Income);

    let effective_income = if income.is_finite() && income > 0.0 {
        income
    } else {
        computed_income
    };
    let budget = if budget.is_finite() { budget } else { 0.0 };
    let days = period.days_in_month();

    debug!(
        period = %period,
        transactions = in_period.len(),
        expenses,
        effective_income,
        "composed monthly stats"
    );

    MonthlyStats {
        period: *period,
        month: period.month_name().to_string(),
        month_index: period.month(),
        year: period.year(),
        budget,
        income: effective_income,
        computed_income,
        expenses,
        balance: effective_income - expenses,
        transaction_count: in_period.len(),
        avg_daily_expense: expenses / f64::from(days),
    }
}

/// Same as [`monthly_stats`] with a resolved record; a missing record counts as zeros.
pub fn monthly_stats_for_record(
    all_transactions: &[Transaction],
    period: &PeriodKey,
    record: Option<&BudgetRecord>,
) -> MonthlyStats {
    let record = record.copied().unwrap_or_default();
    monthly_stats(
        all_transactions,
        period,
        record.target_budget,
        record.total_income,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketbook_domain::ExpenseTag;

    fn key(y: i32, m: u32) -> PeriodKey {
        PeriodKey::new(y, m).unwrap()
    }

    fn march_sample() -> Vec<Transaction> {
        vec![
            Transaction::new("t1", TransactionKind::Expense, 500.0, "2024-03-05", ExpenseTag::Food),
            Transaction::new("t2", TransactionKind::Expense, 500.0, "2024-03-10", ExpenseTag::Fuel),
            Transaction::new("t3", TransactionKind::Income, 2000.0, "2024-03-01", ExpenseTag::Others),
            Transaction::new("t4", TransactionKind::Expense, 75.0, "2024-02-28", ExpenseTag::Food),
        ]
    }

    #[test]
    fn composes_the_march_example() {
        let stats = monthly_stats(&march_sample(), &key(2024, 3), 1000.0, 0.0);
        assert_eq!(stats.month, "March");
        assert_eq!(stats.month_index, 3);
        assert_eq!(stats.year, 2024);
        assert_eq!(stats.budget, 1000.0);
        assert_eq!(stats.expenses, 1000.0);
        assert_eq!(stats.income, 2000.0);
        assert_eq!(stats.computed_income, 2000.0);
        assert_eq!(stats.balance, 1000.0);
        assert_eq!(stats.transaction_count, 3);
        assert!((stats.avg_daily_expense - 1000.0 / 31.0).abs() < 1e-9);
        assert!((stats.avg_daily_expense - 32.26).abs() < 0.01);
    }

    #[test]
    fn explicit_income_wins_over_transactions() {
        let stats = monthly_stats(&march_sample(), &key(2024, 3), 1000.0, 3000.0);
        assert_eq!(stats.income, 3000.0);
        assert_eq!(stats.computed_income, 2000.0);
        assert_eq!(stats.balance, 2000.0);
    }

    #[test]
    fn empty_period_yields_zeroes() {
        let stats = monthly_stats(&march_sample(), &key(2025, 1), 800.0, 1500.0);
        assert_eq!(stats.expenses, 0.0);
        assert_eq!(stats.transaction_count, 0);
        assert_eq!(stats.balance, 1500.0);
        assert_eq!(stats.avg_daily_expense, 0.0);

        let stats = monthly_stats(&[], &key(2025, 1), 0.0, 0.0);
        assert_eq!(stats.balance, 0.0);
        assert_eq!(stats.income, 0.0);
    }

    #[test]
    fn leap_february_divides_by_29() {
        let txns = vec![Transaction::new(
            "t",
            TransactionKind::Expense,
            290.0,
            "2024-02-14",
            ExpenseTag::Food,
        )];
        let stats = monthly_stats(&txns, &key(2024, 2), 0.0, 0.0);
        assert_eq!(stats.avg_daily_expense, 10.0);
        assert_eq!(stats.balance, -290.0);
    }

    #[test]
    fn missing_record_behaves_like_zeroes() {
        let stats = monthly_stats_for_record(&march_sample(), &key(2024, 3), None);
        assert_eq!(stats.budget, 0.0);
        assert_eq!(stats.income, 2000.0);
    }

    #[test]
    fn non_finite_inputs_fall_back() {
        let stats = monthly_stats(&march_sample(), &key(2024, 3), f64::NAN, f64::NAN);
        assert_eq!(stats.budget, 0.0);
        assert_eq!(stats.income, 2000.0);
    }
}
