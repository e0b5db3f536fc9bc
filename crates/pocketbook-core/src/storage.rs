use pocketbook_domain::{
    BudgetRecord, NewSavingsGoal, NewTransaction, PeriodKey, SavingsGoal, Transaction,
};

use crate::CoreError;

/// Abstraction over persistence backends holding transactions, budgets and goals.
///
/// Implementations own identifier generation and any legacy schema handling;
/// callers only ever see canonical domain records.
pub trait ExpenseStore: Send + Sync {
    fn list_transactions(&self) -> Result<Vec<Transaction>, CoreError>;
    fn add_transaction(&self, transaction: NewTransaction) -> Result<Transaction, CoreError>;
    /// Deletes by id, returning `false` when nothing matched.
    fn delete_transaction(&self, id: &str) -> Result<bool, CoreError>;

    fn default_budget(&self) -> Result<Option<BudgetRecord>, CoreError>;
    fn save_default_budget(&self, record: BudgetRecord) -> Result<(), CoreError>;
    fn monthly_budget(&self, period: &PeriodKey) -> Result<Option<BudgetRecord>, CoreError>;
    fn save_monthly_budget(&self, period: &PeriodKey, record: BudgetRecord)
        -> Result<(), CoreError>;

    fn savings_goals(&self) -> Result<Vec<SavingsGoal>, CoreError>;
    fn add_savings_goal(&self, goal: NewSavingsGoal) -> Result<SavingsGoal, CoreError>;
    /// Adds `amount` to the goal's current amount and returns the updated goal.
    fn allocate_to_goal(&self, id: &str, amount: f64) -> Result<SavingsGoal, CoreError>;
    fn delete_savings_goal(&self, id: &str) -> Result<bool, CoreError>;
}
