//! pocketbook-domain
//!
//! Pure domain models (Transaction, ExpenseTag, PeriodKey, BudgetRecord, derived summaries).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod budget;
pub mod period;
pub mod savings;
pub mod summary;
pub mod tag;
pub mod transaction;

pub use budget::*;
pub use period::*;
pub use savings::*;
pub use summary::*;
pub use tag::*;
pub use transaction::*;
