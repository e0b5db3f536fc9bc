use serde::{de::Deserializer, Deserialize, Serialize};
use std::{fmt, path::PathBuf};

const DATA_DIR_NAME: &str = "Pocketbook";
const DATA_FILE_NAME: &str = "pocketbook.json";

/// Stores user-configurable preferences and the storage selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub storage: StorageSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            currency_symbol: Self::default_currency_symbol(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            storage: StorageSettings::default(),
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Switches currency and resets the symbol to the one that currency usually prints with.
    pub fn set_currency(&mut self, code: &str) {
        self.currency = code.trim().to_ascii_uppercase();
        self.currency_symbol = symbol_for_currency(&self.currency);
    }

    /// Symbol to print amounts with; falls back to the currency's usual symbol when blank.
    pub fn money_symbol(&self) -> String {
        if self.currency_symbol.trim().is_empty() {
            symbol_for_currency(&self.currency)
        } else {
            self.currency_symbol.clone()
        }
    }

    /// Indian locales group digits as 12,34,567 rather than 1,234,567.
    pub fn uses_lakh_grouping(&self) -> bool {
        self.locale.trim().to_ascii_uppercase().ends_with("-IN")
    }

    /// Data file for the JSON backend. Defaults to `~/Documents/Pocketbook/pocketbook.json`.
    pub fn resolve_data_file(&self) -> PathBuf {
        if let Some(path) = &self.storage.data_file {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(DATA_DIR_NAME).join(DATA_FILE_NAME)
    }
}

fn symbol_for_currency(code: &str) -> String {
    match code {
        "USD" | "CAD" | "AUD" | "NZD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "INR" => "₹".into(),
        "JPY" | "CNY" => "¥".into(),
        other => format!("{other} "),
    }
}

/// Which persistence backend the application wires in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Json,
    Memory,
}

impl StorageBackend {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| StorageBackend::from_label(v.trim()))
            .unwrap_or_default()
    }

    /// Unknown labels fall back to the JSON file backend.
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => StorageBackend::Memory,
            _ => StorageBackend::Json,
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StorageBackend::Json => "json",
            StorageBackend::Memory => "memory",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for StorageBackend {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(StorageBackend::from_value(value))
    }
}
