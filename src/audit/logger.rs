//! Append-only JSONL audit log writer and reader

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FinanceError, FinanceResult};

use super::entry::AuditEntry;

/// Writes and reads `audit.log`, one JSON entry per line
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry and flush
    pub fn log(&self, entry: &AuditEntry) -> FinanceResult<()> {
        self.log_batch(std::slice::from_ref(entry))
    }

    /// Append several entries with a single flush at the end
    pub fn log_batch(&self, entries: &[AuditEntry]) -> FinanceResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| FinanceError::Io(format!("Failed to open audit log: {}", e)))?;
        let mut writer = BufWriter::new(file);

        for entry in entries {
            let json = serde_json::to_string(entry).map_err(|e| {
                FinanceError::Json(format!("Failed to serialize audit entry: {}", e))
            })?;
            writeln!(writer, "{}", json)
                .map_err(|e| FinanceError::Io(format!("Failed to write audit entry: {}", e)))?;
            debug!(
                operation = %entry.operation,
                entity = %entry.entity_type,
                id = %entry.entity_id,
                "audit entry written"
            );
        }

        writer
            .flush()
            .map_err(|e| FinanceError::Io(format!("Failed to flush audit log: {}", e)))
    }

    /// All entries, oldest first
    pub fn read_all(&self) -> FinanceResult<Vec<AuditEntry>> {
        let Some(reader) = open_reader(&self.log_path)? else {
            return Ok(Vec::new());
        };

        let mut entries = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                FinanceError::Io(format!("Failed to read audit log line {}: {}", index + 1, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let entry = serde_json::from_str(&line).map_err(|e| {
                FinanceError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    index + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> FinanceResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// Number of non-empty lines in the log
    pub fn entry_count(&self) -> FinanceResult<usize> {
        let Some(reader) = open_reader(&self.log_path)? else {
            return Ok(0);
        };

        Ok(reader
            .lines()
            .map_while(Result::ok)
            .filter(|line| !line.trim().is_empty())
            .count())
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

fn open_reader(path: &Path) -> FinanceResult<Option<BufReader<File>>> {
    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| FinanceError::Io(format!("Failed to open audit log: {}", e)))?;
    Ok(Some(BufReader::new(file)))
}
