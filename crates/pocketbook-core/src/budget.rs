//! Chooses which budget record applies to a period.

use pocketbook_domain::BudgetRecord;

/// The period's own record when present, otherwise the global default.
pub fn resolve_budget(
    period_record: Option<&BudgetRecord>,
    default_record: Option<&BudgetRecord>,
) -> Option<BudgetRecord> {
    period_record.or(default_record).copied()
}
