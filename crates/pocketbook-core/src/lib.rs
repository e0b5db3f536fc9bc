//! pocketbook-core
//!
//! Monthly aggregation and derived-metrics engine for Pocketbook.
//! Depends on pocketbook-domain. No CLI, no terminal I/O, no direct storage interactions:
//! persistence is reached only through the [`storage::ExpenseStore`] seam.

pub mod aggregate;
pub mod budget;
pub mod compare;
pub mod error;
pub mod filter;
pub mod insights;
pub mod period;
pub mod progress;
pub mod savings;
pub mod stats;
pub mod storage;
pub mod time;

pub use aggregate::{category_breakdown, sum_by_kind};
pub use budget::resolve_budget;
pub use compare::{compare_months, percent_change};
pub use error::CoreError;
pub use filter::{filter_by_period, TransactionFilter};
pub use insights::monthly_insights;
pub use period::{period_key, period_key_of};
pub use progress::{budget_progress, progress_percent, progress_tier};
pub use stats::{monthly_stats, monthly_stats_for_record};
pub use storage::ExpenseStore;
pub use time::{Clock, FixedClock, SystemClock};
