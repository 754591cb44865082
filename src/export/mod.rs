//! Export module for Monexa
//!
//! Machine-readable output for scripting and backups:
//! - CSV: accounts or transactions (spreadsheet-compatible)
//! - JSON: lists, or a full versioned snapshot of the session
//! - YAML: the same, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_accounts_csv, export_transactions_csv};
pub use json::{export_full_json, write_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, write_yaml};

use clap::ValueEnum;
use std::io::Write;

use crate::error::MonexaResult;
use crate::models::{Account, Transaction};
use crate::storage::AccountStore;

/// Output format for list commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Formatted table for the terminal
    #[default]
    Table,
    Json,
    Csv,
    Yaml,
}

/// Write `accounts` in a machine-readable format
///
/// `Table` is rendered by the display layer and writes nothing here.
pub fn write_accounts<W: Write>(
    format: OutputFormat,
    accounts: &[&Account],
    writer: &mut W,
) -> MonexaResult<()> {
    match format {
        OutputFormat::Table => Ok(()),
        OutputFormat::Json => write_json(accounts, writer, true),
        OutputFormat::Csv => export_accounts_csv(accounts, writer),
        OutputFormat::Yaml => write_yaml(accounts, writer),
    }
}

/// Write `transactions` in a machine-readable format
pub fn write_transactions<W: Write>(
    format: OutputFormat,
    transactions: &[&Transaction],
    accounts: &AccountStore,
    writer: &mut W,
) -> MonexaResult<()> {
    match format {
        OutputFormat::Table => Ok(()),
        OutputFormat::Json => write_json(transactions, writer, true),
        OutputFormat::Csv => export_transactions_csv(transactions, accounts, writer),
        OutputFormat::Yaml => write_yaml(transactions, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sample::sample_accounts;

    #[test]
    fn test_write_accounts_json() {
        let store = sample_accounts();
        let accounts: Vec<_> = store.search("depot");
        let mut buffer = Vec::new();
        write_accounts(OutputFormat::Json, &accounts, &mut buffer).unwrap();

        let parsed: Vec<Account> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].bank_name, "Trade Republic");
    }

    #[test]
    fn test_table_writes_nothing() {
        let store = sample_accounts();
        let accounts: Vec<_> = store.iter().collect();
        let mut buffer = Vec::new();
        write_accounts(OutputFormat::Table, &accounts, &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }
}
