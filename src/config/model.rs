//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the expense mirror lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Screen text and formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Prefix shown before every amount and the total (e.g. `"R$"`, `"$"`).
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            currency_symbol: default_currency_symbol(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Diagnostic log settings. Output always goes to a file since the
/// terminal belongs to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            log_file: default_log_file(),
        }
    }
}

fn app_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spendtrack")
}

fn default_data_dir() -> PathBuf {
    app_data_dir()
}
fn default_true() -> bool {
    true
}
fn default_title() -> String {
    "Expense Tracker".to_string()
}
fn default_currency_symbol() -> String {
    "R$".to_string()
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_file() -> PathBuf {
    app_data_dir().join("spendtrack.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.currency_symbol, "R$");
        assert_eq!(config.ui.timestamp_format, "%H:%M");
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
        assert!(config.storage.data_dir.ends_with("spendtrack"));
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            currency_symbol = "$"

            [storage]
            data_dir = "/tmp/expenses"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.currency_symbol, "$");
        assert_eq!(config.ui.title, "Expense Tracker");
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/expenses"));
        assert!(config.logging.enabled);
    }
}
