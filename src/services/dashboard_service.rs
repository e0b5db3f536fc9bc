use std::sync::Arc;

use pocketbook_core::{
    budget_progress, category_breakdown, compare_months, filter_by_period, monthly_insights,
    monthly_stats_for_record, period_key, resolve_budget, Clock, ExpenseStore,
};
use pocketbook_domain::{
    BudgetProgress, BudgetRecord, CategorySlice, MonthComparison, MonthlyInsights, MonthlyStats,
    PeriodKey, Transaction,
};
use serde::Serialize;
use tracing::{debug, warn};

use super::{transaction_service::newest_first, ServiceResult};

/// Everything the monthly overview shows for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub period: PeriodKey,
    pub budget: Option<BudgetRecord>,
    pub stats: MonthlyStats,
    /// Previous month, only when a budget applies to it.
    pub previous: Option<MonthlyStats>,
    pub comparison: MonthComparison,
    pub breakdown: Vec<CategorySlice>,
    pub progress: BudgetProgress,
    pub insights: MonthlyInsights,
    pub transactions: Vec<Transaction>,
}

pub struct DashboardService {
    store: Arc<dyn ExpenseStore>,
    clock: Arc<dyn Clock>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn ExpenseStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn current_period(&self) -> PeriodKey {
        period_key(self.clock.today())
    }

    /// Builds the overview for `period`, defaulting to the clock's current month.
    pub fn dashboard(&self, period: Option<PeriodKey>) -> ServiceResult<Dashboard> {
        let period = period.unwrap_or_else(|| self.current_period());
        let all = self.store.list_transactions()?;
        let undated = all.iter().filter(|txn| txn.parsed_date().is_none()).count();
        if undated > 0 {
            warn!(undated, "ignoring transactions with unparseable dates");
        }
        let default_record = self.store.default_budget()?;

        let own = self.store.monthly_budget(&period)?;
        let budget = resolve_budget(own.as_ref(), default_record.as_ref());
        let stats = monthly_stats_for_record(&all, &period, budget.as_ref());

        let previous_key = period.previous();
        let previous_own = self.store.monthly_budget(&previous_key)?;
        let previous = resolve_budget(previous_own.as_ref(), default_record.as_ref())
            .map(|record| monthly_stats_for_record(&all, &previous_key, Some(&record)));

        let in_period = filter_by_period(&all, &period);
        let breakdown = category_breakdown(in_period.iter().copied());

        debug!(
            period = %period,
            has_previous = previous.is_some(),
            categories = breakdown.len(),
            "dashboard assembled"
        );

        Ok(Dashboard {
            period,
            budget,
            comparison: compare_months(&stats, previous.as_ref()),
            progress: budget_progress(stats.budget, stats.expenses),
            insights: monthly_insights(&stats),
            transactions: newest_first(in_period),
            breakdown,
            previous,
            stats,
        })
    }
}
