//! Savings goal progress and the balance available to fund goals.

use pocketbook_domain::{SavingsGoal, Transaction, TransactionKind};

use crate::aggregate::sum_by_kind;

/// All-time income minus all-time expenses.
pub fn available_balance(transactions: &[Transaction]) -> f64 {
    sum_by_kind(transactions, TransactionKind::Income)
        - sum_by_kind(transactions, TransactionKind::Expense)
}

/// Funded share of the goal, capped at 100; 0 for goals without a positive target.
pub fn goal_progress_percent(goal: &SavingsGoal) -> f64 {
    if !(goal.target_amount.is_finite() && goal.target_amount > 0.0) {
        return 0.0;
    }
    let current = if goal.current_amount.is_finite() {
        goal.current_amount
    } else {
        0.0
    };
    (current / goal.target_amount * 100.0).clamp(0.0, 100.0)
}

pub fn goal_remaining(goal: &SavingsGoal) -> f64 {
    (goal.target_amount - goal.current_amount).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketbook_domain::ExpenseTag;

    #[test]
    fn balance_spans_every_month() {
        let txns = vec![
            Transaction::new("a", TransactionKind::Income, 3000.0, "2024-01-01", ExpenseTag::Others),
            Transaction::new("b", TransactionKind::Expense, 800.0, "2024-01-09", ExpenseTag::Bills),
            Transaction::new("c", TransactionKind::Expense, 200.0, "2024-02-09", ExpenseTag::Food),
            Transaction::new("d", TransactionKind::Expense, 50.0, "garbage", ExpenseTag::Food),
        ];
        assert_eq!(available_balance(&txns), 1950.0);
        assert_eq!(available_balance(&[]), 0.0);
    }

    #[test]
    fn progress_caps_at_one_hundred() {
        let mut goal = SavingsGoal::new("goal_1", "Car", 1000.0);
        assert_eq!(goal_progress_percent(&goal), 0.0);
        goal.current_amount = 250.0;
        assert_eq!(goal_progress_percent(&goal), 25.0);
        assert_eq!(goal_remaining(&goal), 750.0);
        goal.current_amount = 1500.0;
        assert_eq!(goal_progress_percent(&goal), 100.0);
        assert_eq!(goal_remaining(&goal), 0.0);
    }

    #[test]
    fn zero_target_reports_no_progress() {
        let mut goal = SavingsGoal::new("goal_2", "Someday", 0.0);
        goal.current_amount = 10.0;
        assert_eq!(goal_progress_percent(&goal), 0.0);
    }
}
