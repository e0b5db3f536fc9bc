//! Budget and income targets.

use serde::{Deserialize, Serialize};

/// Target budget and income for one period, or the global default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRecord {
    #[serde(default)]
    pub target_budget: f64,
    #[serde(default)]
    pub total_income: f64,
}

impl BudgetRecord {
    pub fn new(target_budget: f64, total_income: f64) -> Self {
        Self {
            target_budget,
            total_income,
        }
    }

    /// True when no budget target has been set.
    pub fn is_unset(&self) -> bool {
        !(self.target_budget.is_finite() && self.target_budget > 0.0)
    }
}
