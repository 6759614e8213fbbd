//! CSV export
//!
//! Plain-text dumps of the expense list and the transaction log for use in
//! spreadsheets. Amounts are written in major units with two decimals.

use std::io::Write;

use crate::error::{SpendbookError, SpendbookResult};
use crate::models::{AppState, TransactionKind};

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(state: &AppState, writer: &mut W) -> SpendbookResult<()> {
    writeln!(writer, "ID,Date,Description,Category,Purpose,Amount")
        .map_err(|e| SpendbookError::Export(e.to_string()))?;

    for expense in &state.expenses {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            expense.id,
            expense.date,
            escape_csv(&expense.description),
            escape_csv(&expense.category),
            escape_csv(&expense.purpose),
            expense.amount,
        )
        .map_err(|e| SpendbookError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export the transaction log to CSV, newest first
pub fn export_transactions_csv<W: Write>(state: &AppState, writer: &mut W) -> SpendbookResult<()> {
    writeln!(writer, "ID,Date,Type,Description,Amount")
        .map_err(|e| SpendbookError::Export(e.to_string()))?;

    for transaction in &state.balance.transactions {
        let kind = match transaction.kind {
            TransactionKind::Credit => "credit",
            TransactionKind::Debit => "debit",
        };
        writeln!(
            writer,
            "{},{},{},{},{}",
            transaction.id,
            transaction.date.to_rfc3339(),
            kind,
            escape_csv(&transaction.description),
            transaction.amount,
        )
        .map_err(|e| SpendbookError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a CSV field: quote when it contains a comma, quote or newline
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
