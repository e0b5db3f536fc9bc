//! Derived, never-stored view models produced by the aggregation engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{period::PeriodKey, tag::ExpenseTag};

/// One tag's share of the expenses under consideration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub tag: ExpenseTag,
    pub amount: f64,
    pub percent: u32,
}

/// Aggregate statistics for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub period: PeriodKey,
    /// Full month name for display, e.g. "March".
    pub month: String,
    pub month_index: u32,
    pub year: i32,
    pub budget: f64,
    /// Effective income: the explicit figure when positive, else `computed_income`.
    pub income: f64,
    pub computed_income: f64,
    pub expenses: f64,
    pub balance: f64,
    pub transaction_count: usize,
    pub avg_daily_expense: f64,
}

/// Percentage deltas between two months. `None` marks an undefined change.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthComparison {
    pub expenses: Option<f64>,
    pub income: Option<f64>,
    pub balance: Option<f64>,
}

/// Budget health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProgressTier {
    OnTrack,
    Warning,
    OverBudget,
}

impl fmt::Display for ProgressTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProgressTier::OnTrack => "On Track",
            ProgressTier::Warning => "Warning",
            ProgressTier::OverBudget => "Over Budget",
        };
        f.write_str(label)
    }
}

/// Spend-to-budget progress for gauges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetProgress {
    pub tier: ProgressTier,
    /// Display percentage, saturating at 100.
    pub percent: u32,
    /// Raw spend / budget ratio; 0 when no budget is set.
    pub ratio: f64,
}

/// Secondary ratios shown next to the monthly statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyInsights {
    pub savings_rate: f64,
    pub budget_utilization: f64,
    pub budget_remaining: f64,
    pub savings_potential: f64,
}
