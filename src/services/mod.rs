pub mod budget_service;
pub mod dashboard_service;
pub mod savings_service;
pub mod transaction_service;

pub use budget_service::BudgetService;
pub use dashboard_service::{Dashboard, DashboardService};
pub use savings_service::{GoalProgress, SavingsOverview, SavingsService};
pub use transaction_service::TransactionService;

use pocketbook_core::CoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("{0}")]
    Invalid(String),
}

fn ensure_positive(value: f64, field: &str) -> ServiceResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ServiceError::Invalid(format!(
            "{field} must be a positive number, got {value}"
        )))
    }
}

fn ensure_non_negative(value: f64, field: &str) -> ServiceResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ServiceError::Invalid(format!(
            "{field} must be zero or more, got {value}"
        )))
    }
}
