//! Month-over-month percentage changes.

use pocketbook_domain::{MonthComparison, MonthlyStats};

/// Percentage change from `previous` to `current`.
///
/// Returns `None` when the baseline is zero or either side is not finite, so an
/// undefined change stays distinguishable from a real 0% change.
pub fn percent_change(current: f64, previous: f64) -> Option<f64> {
    if !current.is_finite() || !previous.is_finite() || previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

/// Compares any two months; periods need not be adjacent.
pub fn compare_months(current: &MonthlyStats, previous: Option<&MonthlyStats>) -> MonthComparison {
    let Some(previous) = previous else {
        return MonthComparison::default();
    };
    MonthComparison {
        expenses: percent_change(current.expenses, previous.expenses),
        income: percent_change(current.income, previous.income),
        balance: percent_change(current.balance, previous.balance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::monthly_stats;
    use pocketbook_domain::{ExpenseTag, PeriodKey, Transaction, TransactionKind};

    #[test]
    fn zero_baseline_is_undefined() {
        for current in [-10.0, 0.0, 42.0, 1e9] {
            assert_eq!(percent_change(current, 0.0), None);
        }
        assert_eq!(percent_change(0.0, 0.0), None);
        assert_eq!(percent_change(f64::NAN, 10.0), None);
    }

    #[test]
    fn computes_relative_change() {
        assert_eq!(percent_change(150.0, 100.0), Some(50.0));
        assert_eq!(percent_change(50.0, 100.0), Some(-50.0));
        assert_eq!(percent_change(100.0, 100.0), Some(0.0));
    }

    #[test]
    fn compares_two_arbitrary_months() {
        let txns = vec![
            Transaction::new("a", TransactionKind::Expense, 200.0, "2024-01-10", ExpenseTag::Food),
            Transaction::new("b", TransactionKind::Expense, 300.0, "2024-04-10", ExpenseTag::Food),
        ];
        let january = monthly_stats(&txns, &PeriodKey::new(2024, 1).unwrap(), 0.0, 1000.0);
        let april = monthly_stats(&txns, &PeriodKey::new(2024, 4).unwrap(), 0.0, 1000.0);
        let comparison = compare_months(&april, Some(&january));
        assert_eq!(comparison.expenses, Some(50.0));
        assert_eq!(comparison.income, Some(0.0));
        assert_eq!(comparison.balance, Some(-12.5));
    }

    #[test]
    fn missing_previous_month_yields_no_deltas() {
        let stats = monthly_stats(&[], &PeriodKey::new(2024, 1).unwrap(), 0.0, 0.0);
        assert_eq!(compare_months(&stats, None), MonthComparison::default());
    }
}
