//! Savings rate and budget utilization derived from monthly stats.

use pocketbook_domain::{MonthlyInsights, MonthlyStats};

pub fn monthly_insights(stats: &MonthlyStats) -> MonthlyInsights {
    let savings_rate = if stats.income > 0.0 {
        (stats.income - stats.expenses) / stats.income * 100.0
    } else {
        0.0
    };
    // Not clamped; gauges use `progress_percent`.
    let budget_utilization = if stats.budget > 0.0 {
        stats.expenses / stats.budget * 100.0
    } else {
        0.0
    };
    MonthlyInsights {
        savings_rate,
        budget_utilization,
        budget_remaining: stats.budget - stats.expenses,
        savings_potential: (stats.income - stats.expenses).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::monthly_stats;
    use pocketbook_domain::{ExpenseTag, PeriodKey, Transaction, TransactionKind};

    fn key() -> PeriodKey {
        PeriodKey::new(2024, 3).unwrap()
    }

    #[test]
    fn derives_rates_from_stats() {
        let txns = vec![Transaction::new(
            "a",
            TransactionKind::Expense,
            1200.0,
            "2024-03-03",
            ExpenseTag::Bills,
        )];
        let stats = monthly_stats(&txns, &key(), 1000.0, 2000.0);
        let insights = monthly_insights(&stats);
        assert!((insights.savings_rate - 40.0).abs() < 1e-9);
        assert!((insights.budget_utilization - 120.0).abs() < 1e-9);
        assert_eq!(insights.budget_remaining, -200.0);
        assert_eq!(insights.savings_potential, 800.0);
    }

    #[test]
    fn zero_income_and_budget_fall_back_to_zero() {
        let txns = vec![Transaction::new(
            "a",
            TransactionKind::Expense,
            50.0,
            "2024-03-03",
            ExpenseTag::Bills,
        )];
        let insights = monthly_insights(&monthly_stats(&txns, &key(), 0.0, 0.0));
        assert_eq!(insights.savings_rate, 0.0);
        assert_eq!(insights.budget_utilization, 0.0);
        assert_eq!(insights.savings_potential, 0.0);
    }
}
