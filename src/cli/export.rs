//! CLI commands for data export
//!
//! Provides commands for exporting data in various formats.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Subcommand, ValueEnum};

use super::Session;
use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv, FullExport};

/// Full export format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON, machine-readable
    Json,
    /// YAML, human-readable
    Yaml,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export transactions to CSV
    Transactions {
        /// Output file (default: exports/transactions-YYYYMMDD.csv)
        output: Option<PathBuf>,
    },

    /// Export every record to a single file
    All {
        /// Output file (default: exports/kwanza-YYYYMMDD.<format>)
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show what an export would contain without writing files
    Info,
}

pub fn handle_export_command(session: &Session, cmd: ExportCommands) -> FinanceResult<()> {
    match cmd {
        ExportCommands::Transactions { output } => {
            let path = output_path(session, output, "transactions", "csv")?;
            let mut writer = create(&path)?;
            let count = export_transactions_csv(&session.state.transactions, &mut writer)?;
            writer.flush()?;
            println!("Exported {} transactions to: {}", count, path.display());
        }

        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let path = output_path(session, output, "kwanza", format.extension())?;
            let mut writer = create(&path)?;
            match format {
                ExportFormat::Json => export_full_json(&session.state, &mut writer, pretty)?,
                ExportFormat::Yaml => export_full_yaml(&session.state, &mut writer)?,
            }
            writer.flush()?;
            println!("Full data exported to: {}", path.display());
        }

        ExportCommands::Info => {
            let export = FullExport::from_state(&session.state);

            println!("Export Information");
            println!("==================\n");
            println!("Schema Version: {}", export.schema_version);
            println!("App Version:    {}", export.app_version);
            println!();
            println!("Data Summary:");
            println!("  Transactions:  {}", export.metadata.transaction_count);
            println!("  Budgets:       {}", export.metadata.budget_count);
            println!("  Goals:         {}", export.metadata.goal_count);
            println!("  Debts:         {}", export.metadata.debt_count);

            if let Some(earliest) = &export.metadata.earliest_transaction {
                println!();
                println!("Transaction Date Range:");
                println!("  Earliest: {}", earliest);
            }
            if let Some(latest) = &export.metadata.latest_transaction {
                println!("  Latest:   {}", latest);
            }
        }
    }

    Ok(())
}

/// Explicit output path, or a dated file in the exports directory
fn output_path(
    session: &Session,
    output: Option<PathBuf>,
    stem: &str,
    extension: &str,
) -> FinanceResult<PathBuf> {
    if let Some(path) = output {
        return Ok(path);
    }

    let dir = session.storage.paths().exports_dir();
    std::fs::create_dir_all(&dir).map_err(|e| {
        FinanceError::Export(format!("Failed to create {}: {}", dir.display(), e))
    })?;

    Ok(dir.join(format!(
        "{}-{}.{}",
        stem,
        Utc::now().format("%Y%m%d"),
        extension
    )))
}

fn create(path: &Path) -> FinanceResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        FinanceError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
