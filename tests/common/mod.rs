#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc, sync::Mutex};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use pocketbook_core::{ExpenseStore, FixedClock};
use pocketbook_storage_json::JsonExpenseStore;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Fresh directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// JSON-backed store in an isolated directory, plus its data file path.
pub fn setup_store() -> (Arc<dyn ExpenseStore>, PathBuf) {
    let path = temp_base().join("pocketbook.json");
    let store: Arc<dyn ExpenseStore> = Arc::new(JsonExpenseStore::open(&path));
    (store, path)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn clock_on(y: i32, m: u32, d: u32) -> Arc<FixedClock> {
    Arc::new(FixedClock::on(date(y, m, d)))
}
