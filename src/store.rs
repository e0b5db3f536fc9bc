//! Builds the [`ExpenseStore`] selected by configuration.

use std::{path::PathBuf, sync::Arc};

use pocketbook_config::{Config, StorageBackend};
use pocketbook_core::ExpenseStore;
use pocketbook_storage_json::{JsonExpenseStore, MemoryExpenseStore};
use tracing::debug;

/// Opens the configured backend. `data_file` overrides the configured JSON path.
pub fn open_store(config: &Config, data_file: Option<PathBuf>) -> Arc<dyn ExpenseStore> {
    match (config.storage.backend, data_file) {
        (_, Some(path)) => Arc::new(JsonExpenseStore::open(path)),
        (StorageBackend::Json, None) => Arc::new(JsonExpenseStore::open(config.resolve_data_file())),
        (StorageBackend::Memory, None) => {
            debug!("using in-memory expense store");
            Arc::new(MemoryExpenseStore::new())
        }
    }
}
