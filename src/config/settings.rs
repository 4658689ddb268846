//! User settings for kwanza-cli
//!
//! Currency presentation, report window and logging level, persisted as
//! `config.json`. Every field has a default so older or hand-edited files
//! still load.

use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::engine::currency::CurrencyFormat;
use crate::engine::monthly::DEFAULT_SERIES_MONTHS;
use crate::error::FinanceError;

/// User settings for kwanza-cli
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How amounts are rendered
    #[serde(default)]
    pub currency: CurrencyFormat,

    /// Number of months shown by the monthly report
    #[serde(default = "default_series_months")]
    pub series_months: usize,

    /// Owner recorded on every transaction this installation creates
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_series_months() -> usize {
    DEFAULT_SERIES_MONTHS
}

fn default_user_id() -> String {
    "local".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: CurrencyFormat::default(),
            series_months: default_series_months(),
            user_id: default_user_id(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinanceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Set a single setting by key, as typed on the command line
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), FinanceError> {
        match key {
            key if key.starts_with("currency") => {
                return Err(FinanceError::Config(format!(
                    "{} is fixed per installation and cannot be changed",
                    key
                )));
            }
            "series_months" => {
                let months: usize = value.parse().map_err(|_| {
                    FinanceError::Config(format!("Invalid month count: {}", value))
                })?;
                if months == 0 {
                    return Err(FinanceError::Config(
                        "series_months must be at least 1".into(),
                    ));
                }
                self.series_months = months;
            }
            "user_id" => {
                if value.trim().is_empty() {
                    return Err(FinanceError::Config("user_id cannot be empty".into()));
                }
                self.user_id = value.trim().to_string();
            }
            "log_level" => self.log_level = value.to_string(),
            other => {
                return Err(FinanceError::Config(format!("Unknown setting: {}", other)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency.symbol, "Kz");
        assert_eq!(settings.currency.code, "AOA");
        assert_eq!(settings.series_months, 6);
        assert_eq!(settings.user_id, "local");
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.set("series_months", "12").unwrap();
        settings.set("user_id", "ana").unwrap();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.series_months, 12);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"user_id": "ana"}"#).unwrap();
        assert_eq!(settings.user_id, "ana");
        assert_eq!(settings.series_months, 6);
        assert_eq!(settings.currency, CurrencyFormat::default());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut settings = Settings::default();
        assert!(settings.set("series_months", "0").is_err());
        assert!(settings.set("series_months", "six").is_err());
        assert!(settings.set("user_id", "  ").is_err());
        assert!(settings.set("nope", "1").is_err());
    }

    #[test]
    fn test_currency_is_read_only() {
        let mut settings = Settings::default();
        for key in ["currency.symbol", "currency.locale", "currency.fraction_digits"] {
            let err = settings.set(key, "2").unwrap_err();
            assert!(err.to_string().contains("fixed"));
        }
        assert_eq!(settings.currency, CurrencyFormat::default());
    }
}
