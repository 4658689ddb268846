//! Audit log listing

use clap::Args;

use super::Session;
use crate::audit::AuditEntry;
use crate::display::report::{format_header, separator};
use crate::error::FinanceResult;

const WIDTH: usize = 72;

#[derive(Args)]
pub struct AuditArgs {
    /// Number of most recent entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

pub fn handle_audit_command(session: &Session, args: AuditArgs) -> FinanceResult<()> {
    let total = session.audit.entry_count()?;
    let entries = session.audit.read_recent(args.limit)?;
    print!("{}", format_audit_log(&entries, total));
    Ok(())
}

/// Entries oldest first, under a centred title with the total count
pub fn format_audit_log(entries: &[AuditEntry], total: usize) -> String {
    if entries.is_empty() {
        return "Audit log is empty.\n".to_string();
    }

    let mut output = format!("{}\n", format_header("Audit log", WIDTH));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output.push_str(&format!("Showing {} of {} entries\n", entries.len(), total));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditLogger, EntityType};
    use crate::models::{Category, Money};
    use tempfile::TempDir;

    #[test]
    fn test_format_recent_entries() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));

        let entries: Vec<AuditEntry> = ["comida", "renda", "luz"]
            .iter()
            .map(|name| {
                AuditEntry::create(
                    EntityType::Budget,
                    "abc12345",
                    Some(name.to_string()),
                    &(Category::Food, Money::new(1000.0)),
                )
            })
            .collect();
        logger.log_batch(&entries).unwrap();

        let recent = logger.read_recent(2).unwrap();
        let output = format_audit_log(&recent, logger.entry_count().unwrap());

        assert!(output.contains("Audit log"));
        assert!(output.contains("(renda)"));
        assert!(output.contains("(luz)"));
        assert!(!output.contains("(comida)"));
        assert!(output.contains("Showing 2 of 3 entries"));
    }

    #[test]
    fn test_empty_log() {
        assert_eq!(format_audit_log(&[], 0), "Audit log is empty.\n");
    }
}
