use std::sync::Arc;

use pocketbook_core::{resolve_budget, ExpenseStore};
use pocketbook_domain::{BudgetRecord, PeriodKey};
use tracing::info;

use super::{ensure_non_negative, ServiceResult};

pub struct BudgetService {
    store: Arc<dyn ExpenseStore>,
}

impl BudgetService {
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }

    /// Saves the record for `period` and makes it the default for months without one.
    pub fn set_month_budget(
        &self,
        period: &PeriodKey,
        record: BudgetRecord,
    ) -> ServiceResult<BudgetRecord> {
        ensure_non_negative(record.target_budget, "budget")?;
        ensure_non_negative(record.total_income, "income")?;

        self.store.save_monthly_budget(period, record)?;
        self.store.save_default_budget(record)?;
        info!(
            period = %period,
            budget = record.target_budget,
            income = record.total_income,
            "budget updated"
        );
        Ok(record)
    }

    /// The period's own record, else the default, else `None`.
    pub fn budget_for(&self, period: &PeriodKey) -> ServiceResult<Option<BudgetRecord>> {
        let own = self.store.monthly_budget(period)?;
        let fallback = self.store.default_budget()?;
        Ok(resolve_budget(own.as_ref(), fallback.as_ref()))
    }
}
