#![doc(test(attr(deny(warnings))))]

//! Pocketbook tracks monthly budgets, income and expenses, and turns them into
//! per-month statistics, category breakdowns and savings-goal progress.
//!
//! The aggregation engine lives in `pocketbook-core`; this crate wires it to a
//! store, exposes services for front ends and ships the `pocketbook_cli` binary.

pub mod cli;
pub mod errors;
pub mod services;
pub mod store;
pub mod utils;

pub use errors::PocketbookError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Pocketbook tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
