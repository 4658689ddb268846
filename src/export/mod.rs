//! Export module for kwanza-cli
//!
//! - CSV: transactions, for spreadsheets
//! - JSON: machine-readable full export
//! - YAML: human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_full_yaml;
