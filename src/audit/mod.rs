//! Audit logging for kwanza-cli
//!
//! Every create, update and delete the CLI persists is appended to
//! `audit.log` as one JSON object per line, with the record's value before
//! and after the change.
//!
//! ```rust,ignore
//! use kwanza_cli::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(
//!     EntityType::Goal,
//!     goal.id.to_string(),
//!     Some(goal.name.clone()),
//!     &goal,
//! ))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
