use std::sync::Arc;

use pocketbook_core::{
    savings::{available_balance, goal_progress_percent, goal_remaining},
    CoreError, ExpenseStore,
};
use pocketbook_domain::{NewSavingsGoal, SavingsGoal};
use serde::Serialize;
use tracing::info;

use super::{ensure_positive, ServiceError, ServiceResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal: SavingsGoal,
    pub percent: f64,
    pub remaining: f64,
}

impl From<SavingsGoal> for GoalProgress {
    fn from(goal: SavingsGoal) -> Self {
        Self {
            percent: goal_progress_percent(&goal),
            remaining: goal_remaining(&goal),
            goal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsOverview {
    /// All-time income minus all-time expenses.
    pub available_balance: f64,
    pub goals: Vec<GoalProgress>,
}

pub struct SavingsService {
    store: Arc<dyn ExpenseStore>,
}

impl SavingsService {
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }

    pub fn overview(&self) -> ServiceResult<SavingsOverview> {
        let transactions = self.store.list_transactions()?;
        let goals = self.store.savings_goals()?;
        Ok(SavingsOverview {
            available_balance: available_balance(&transactions),
            goals: goals.into_iter().map(GoalProgress::from).collect(),
        })
    }

    pub fn create_goal(&self, payload: NewSavingsGoal) -> ServiceResult<SavingsGoal> {
        if payload.name.trim().is_empty() {
            return Err(ServiceError::Invalid("goal name must not be empty".into()));
        }
        ensure_positive(payload.target_amount, "target amount")?;
        let goal = self.store.add_savings_goal(payload)?;
        info!(id = %goal.id, name = %goal.name, "savings goal created");
        Ok(goal)
    }

    pub fn allocate(&self, id: &str, amount: f64) -> ServiceResult<GoalProgress> {
        ensure_positive(amount, "allocation")?;
        let goal = self.store.allocate_to_goal(id, amount)?;
        info!(id, amount, total = goal.current_amount, "funds allocated to goal");
        Ok(goal.into())
    }

    pub fn delete_goal(&self, id: &str) -> ServiceResult<()> {
        if self.store.delete_savings_goal(id)? {
            Ok(())
        } else {
            Err(CoreError::GoalNotFound(id.to_string()).into())
        }
    }
}
