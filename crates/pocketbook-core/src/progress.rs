//! Classifies spend against budget.

use pocketbook_domain::{BudgetProgress, ProgressTier};

const WARNING_RATIO: f64 = 0.75;
const OVER_BUDGET_RATIO: f64 = 1.0;

/// Spend-to-budget ratio, `0.0` when there is no usable budget.
pub fn spend_ratio(budget: f64, spent: f64) -> f64 {
    if !budget.is_finite() || budget <= 0.0 || !spent.is_finite() {
        return 0.0;
    }
    spent / budget
}

/// Tier for the given budget and spend. A missing budget is always on track.
pub fn progress_tier(budget: f64, spent: f64) -> ProgressTier {
    let ratio = spend_ratio(budget, spent);
    if ratio >= OVER_BUDGET_RATIO {
        ProgressTier::OverBudget
    } else if ratio >= WARNING_RATIO {
        ProgressTier::Warning
    } else {
        ProgressTier::OnTrack
    }
}

/// Gauge percentage, rounded and saturating at 100.
pub fn progress_percent(budget: f64, spent: f64) -> u32 {
    let percent = (spend_ratio(budget, spent) * 100.0).round();
    percent.clamp(0.0, 100.0) as u32
}

pub fn budget_progress(budget: f64, spent: f64) -> BudgetProgress {
    BudgetProgress {
        tier: progress_tier(budget, spent),
        percent: progress_percent(budget, spent),
        ratio: spend_ratio(budget, spent),
    }
}
