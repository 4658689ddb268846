//! YAML export of the full finance state

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::FullExport;
use crate::state::FinanceState;

fn export_error<E: std::fmt::Display>(e: E) -> FinanceError {
    FinanceError::Export(e.to_string())
}

/// Write the full state as YAML, preceded by a comment header
pub fn export_full_yaml<W: Write>(state: &FinanceState, writer: &mut W) -> FinanceResult<()> {
    let export = FullExport::from_state(state);

    writeln!(writer, "# kwanza-cli full export").map_err(export_error)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_error)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_error)?;
    writeln!(writer).map_err(export_error)?;

    serde_yaml::to_writer(writer, &export).map_err(export_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Debt, Money};

    #[test]
    fn test_export_full_yaml() {
        let state = FinanceState {
            debts: vec![Debt::new(
                "Crédito habitação",
                Money::new(2_500_000.0),
                14.5,
                Money::new(45_000.0),
                60,
            )],
            ..FinanceState::default()
        };

        let mut output = Vec::new();
        export_full_yaml(&state, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# kwanza-cli full export"));
        assert!(text.contains("Crédito habitação"));

        let parsed: FullExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.debts, state.debts);
        assert_eq!(parsed.metadata.debt_count, 1);
    }
}
