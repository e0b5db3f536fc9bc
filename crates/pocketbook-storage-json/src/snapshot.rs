//! On-disk document shape and the operations shared by every backend.

use pocketbook_core::CoreError;
use pocketbook_domain::{
    BudgetRecord, NewSavingsGoal, NewTransaction, PeriodKey, SavingsGoal, Transaction,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub const TRANSACTION_ID_PREFIX: &str = "transaction_";
pub const GOAL_ID_PREFIX: &str = "goal_";

/// Full persisted state: default budget, transactions, per-month budgets and goals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredData {
    #[serde(default)]
    pub summary: Option<BudgetRecord>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub monthly_budgets: Vec<StoredMonthlyBudget>,
    #[serde(default)]
    pub savings_goals: Vec<SavingsGoal>,
}

/// A per-month budget row as written by every historical version of the app.
///
/// Older files duplicate `budget`/`income` as `targetBudget`/`totalIncome`.
/// Reads accept either spelling, preferring the canonical one; writes only
/// emit the canonical names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMonthlyBudget {
    pub month: String,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub income: Option<f64>,
    #[serde(default, skip_serializing)]
    pub target_budget: Option<f64>,
    #[serde(default, skip_serializing)]
    pub total_income: Option<f64>,
}

impl StoredMonthlyBudget {
    pub fn new(period: &PeriodKey, record: BudgetRecord) -> Self {
        Self {
            month: period.to_string(),
            budget: Some(record.target_budget),
            income: Some(record.total_income),
            target_budget: None,
            total_income: None,
        }
    }

    pub fn period(&self) -> Option<PeriodKey> {
        self.month.parse().ok()
    }

    pub fn record(&self) -> BudgetRecord {
        BudgetRecord {
            target_budget: self.budget.or(self.target_budget).unwrap_or(0.0),
            total_income: self.income.or(self.total_income).unwrap_or(0.0),
        }
    }
}

impl StoredData {
    pub fn monthly_budget(&self, period: &PeriodKey) -> Option<BudgetRecord> {
        self.monthly_budgets
            .iter()
            .find(|row| row.period().as_ref() == Some(period))
            .map(StoredMonthlyBudget::record)
    }

    pub fn upsert_monthly_budget(&mut self, period: &PeriodKey, record: BudgetRecord) {
        let row = StoredMonthlyBudget::new(period, record);
        match self
            .monthly_budgets
            .iter_mut()
            .find(|existing| existing.period().as_ref() == Some(period))
        {
            Some(existing) => *existing = row,
            None => self.monthly_budgets.push(row),
        }
    }

    pub fn insert_transaction(&mut self, payload: NewTransaction) -> Transaction {
        let transaction = payload.into_transaction(new_id(TRANSACTION_ID_PREFIX));
        self.transactions.push(transaction.clone());
        transaction
    }

    /// Removes a transaction. Ids outside the transaction namespace are ignored.
    pub fn remove_transaction(&mut self, id: &str) -> bool {
        if !id.starts_with(TRANSACTION_ID_PREFIX) {
            debug!(id, "ignoring delete for id outside the transaction namespace");
            return false;
        }
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.id != id);
        before != self.transactions.len()
    }

    pub fn insert_goal(&mut self, payload: NewSavingsGoal) -> SavingsGoal {
        let goal = payload.into_goal(new_id(GOAL_ID_PREFIX));
        self.savings_goals.push(goal.clone());
        goal
    }

    pub fn fund_goal(&mut self, id: &str, amount: f64) -> Result<SavingsGoal, CoreError> {
        let goal = self
            .savings_goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or_else(|| CoreError::GoalNotFound(id.to_string()))?;
        goal.current_amount += amount;
        Ok(goal.clone())
    }

    pub fn remove_goal(&mut self, id: &str) -> bool {
        let before = self.savings_goals.len();
        self.savings_goals.retain(|goal| goal.id != id);
        before != self.savings_goals.len()
    }
}

fn new_id(prefix: &str) -> String {
    format!("{}{}", prefix, Uuid::new_v4().simple())
}
