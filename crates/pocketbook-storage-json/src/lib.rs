//! pocketbook-storage-json
//!
//! JSON-file and in-memory implementations of [`ExpenseStore`].
//! Owns identifier generation and legacy schema handling so the engine only
//! ever sees canonical records.

pub mod snapshot;

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, RwLock},
};

use pocketbook_core::{CoreError, ExpenseStore};
use pocketbook_domain::{
    BudgetRecord, NewSavingsGoal, NewTransaction, PeriodKey, SavingsGoal, Transaction,
};
use tracing::{debug, info};

pub use snapshot::{StoredData, StoredMonthlyBudget, GOAL_ID_PREFIX, TRANSACTION_ID_PREFIX};

const TMP_SUFFIX: &str = "tmp";

/// Where a [`SnapshotStore`] reads and writes its document.
pub trait SnapshotBackend: Send + Sync {
    fn load(&self) -> Result<StoredData, CoreError>;
    fn persist(&self, data: &StoredData) -> Result<(), CoreError>;
}

/// Keeps the document in a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SnapshotBackend for JsonFileBackend {
    fn load(&self) -> Result<StoredData, CoreError> {
        load_data_from_path(&self.path)
    }

    fn persist(&self, data: &StoredData) -> Result<(), CoreError> {
        save_data_to_path(data, &self.path)
    }
}

/// Keeps the document in process memory; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    data: Mutex<StoredData>,
}

impl SnapshotBackend for MemoryBackend {
    fn load(&self) -> Result<StoredData, CoreError> {
        self.data
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))
    }

    fn persist(&self, data: &StoredData) -> Result<(), CoreError> {
        let mut guard = self
            .data
            .lock()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))?;
        *guard = data.clone();
        Ok(())
    }
}

/// [`ExpenseStore`] over a whole-document backend.
///
/// Every mutation reloads the document, applies the change and persists it
/// while holding the write lock, so concurrent callers in one process never
/// lose each other's writes.
pub struct SnapshotStore<B> {
    backend: B,
    lock: RwLock<()>,
}

pub type JsonExpenseStore = SnapshotStore<JsonFileBackend>;
pub type MemoryExpenseStore = SnapshotStore<MemoryBackend>;

impl<B: SnapshotBackend> SnapshotStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            lock: RwLock::new(()),
        }
    }

    fn read<R>(&self, f: impl FnOnce(&StoredData) -> R) -> Result<R, CoreError> {
        let _guard = self.lock.read().map_err(|_| poisoned())?;
        let data = self.backend.load()?;
        Ok(f(&data))
    }

    fn mutate<R>(
        &self,
        f: impl FnOnce(&mut StoredData) -> Result<R, CoreError>,
    ) -> Result<R, CoreError> {
        let _guard = self.lock.write().map_err(|_| poisoned())?;
        let mut data = self.backend.load()?;
        let result = f(&mut data)?;
        self.backend.persist(&data)?;
        Ok(result)
    }
}

impl JsonExpenseStore {
    /// Opens (without creating) the JSON document at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        info!(path = %path.display(), "using JSON expense store");
        Self::with_backend(JsonFileBackend::new(path))
    }
}

impl MemoryExpenseStore {
    pub fn new() -> Self {
        Self::with_backend(MemoryBackend::default())
    }
}

impl Default for MemoryExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: SnapshotBackend> ExpenseStore for SnapshotStore<B> {
    fn list_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        self.read(|data| data.transactions.clone())
    }

    fn add_transaction(&self, transaction: NewTransaction) -> Result<Transaction, CoreError> {
        let stored = self.mutate(|data| Ok(data.insert_transaction(transaction)))?;
        debug!(id = %stored.id, kind = %stored.kind, "stored transaction");
        Ok(stored)
    }

    fn delete_transaction(&self, id: &str) -> Result<bool, CoreError> {
        self.mutate(|data| Ok(data.remove_transaction(id)))
    }

    fn default_budget(&self) -> Result<Option<BudgetRecord>, CoreError> {
        self.read(|data| data.summary)
    }

    fn save_default_budget(&self, record: BudgetRecord) -> Result<(), CoreError> {
        self.mutate(|data| {
            data.summary = Some(record);
            Ok(())
        })
    }

    fn monthly_budget(&self, period: &PeriodKey) -> Result<Option<BudgetRecord>, CoreError> {
        self.read(|data| data.monthly_budget(period))
    }

    fn save_monthly_budget(
        &self,
        period: &PeriodKey,
        record: BudgetRecord,
    ) -> Result<(), CoreError> {
        self.mutate(|data| {
            data.upsert_monthly_budget(period, record);
            Ok(())
        })
    }

    fn savings_goals(&self) -> Result<Vec<SavingsGoal>, CoreError> {
        self.read(|data| data.savings_goals.clone())
    }

    fn add_savings_goal(&self, goal: NewSavingsGoal) -> Result<SavingsGoal, CoreError> {
        self.mutate(|data| Ok(data.insert_goal(goal)))
    }

    fn allocate_to_goal(&self, id: &str, amount: f64) -> Result<SavingsGoal, CoreError> {
        self.mutate(|data| data.fund_goal(id, amount))
    }

    fn delete_savings_goal(&self, id: &str) -> Result<bool, CoreError> {
        self.mutate(|data| Ok(data.remove_goal(id)))
    }
}

fn poisoned() -> CoreError {
    CoreError::Storage("store lock poisoned".into())
}

/// Saves the document to an arbitrary path on disk via a temporary file.
pub fn save_data_to_path(data: &StoredData, path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(data).map_err(|err| CoreError::Serde(err.to_string()))?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads the document from `path`; a missing or blank file is an empty document.
pub fn load_data_from_path(path: &Path) -> Result<StoredData, CoreError> {
    if !path.exists() {
        return Ok(StoredData::default());
    }
    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Ok(StoredData::default());
    }
    serde_json::from_str(&raw).map_err(|err| CoreError::Serde(err.to_string()))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
