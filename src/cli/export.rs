//! CLI commands for data export
//!
//! Writes the session's data to files in various formats.

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{MonexaError, MonexaResult};
use crate::export::{csv, json, yaml};
use crate::services::query::{filter_transactions, TransactionFilter};

use super::Context;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transactions only)
    Csv,
    /// JSON format (accounts and transactions)
    Json,
    /// YAML format (accounts and transactions, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all data to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export transactions to CSV, newest first
    Transactions {
        /// Output file path
        output: PathBuf,
    },

    /// Export accounts to CSV
    Accounts {
        /// Output file path
        output: PathBuf,
    },
}

fn create_writer(output: &Path) -> MonexaResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        MonexaError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}

fn finish(mut writer: BufWriter<File>) -> MonexaResult<()> {
    writer
        .flush()
        .map_err(|e| MonexaError::Export(e.to_string()))
}

/// Handle export commands
pub fn handle_export_command(ctx: &mut Context, cmd: ExportCommands) -> MonexaResult<()> {
    let session = &ctx.session;

    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let mut writer = create_writer(&output)?;
            match format {
                ExportFormat::Csv => {
                    let transactions = filter_transactions(&session.transactions, &TransactionFilter::new());
                    csv::export_transactions_csv(&transactions, &session.accounts, &mut writer)?;
                    finish(writer)?;
                    println!("Transactions exported to: {}", output.display());
                    println!("Note: CSV format exports transactions only. Use JSON or YAML for a full export.");
                }
                ExportFormat::Json => {
                    json::export_full_json(session, &mut writer, pretty)?;
                    finish(writer)?;
                    println!("Full export written to: {}", output.display());
                }
                ExportFormat::Yaml => {
                    yaml::export_full_yaml(session, &mut writer)?;
                    finish(writer)?;
                    println!("Full export written to: {}", output.display());
                }
            }
        }

        ExportCommands::Transactions { output } => {
            let transactions = filter_transactions(&session.transactions, &TransactionFilter::new());
            let mut writer = create_writer(&output)?;
            csv::export_transactions_csv(&transactions, &session.accounts, &mut writer)?;
            finish(writer)?;
            println!(
                "Exported {} transactions to: {}",
                transactions.len(),
                output.display()
            );
        }

        ExportCommands::Accounts { output } => {
            let accounts: Vec<_> = session.accounts.iter().collect();
            let mut writer = create_writer(&output)?;
            csv::export_accounts_csv(&accounts, &mut writer)?;
            finish(writer)?;
            println!("Exported {} accounts to: {}", accounts.len(), output.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MonexaPaths, Settings};
    use tempfile::TempDir;

    #[test]
    fn test_export_all_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonexaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut ctx = Context::new(paths, Settings::default());
        let output = temp_dir.path().join("export.yaml");

        handle_export_command(
            &mut ctx,
            ExportCommands::All {
                output: output.clone(),
                format: ExportFormat::Yaml,
                pretty: false,
            },
        )
        .unwrap();

        let contents = std::fs::read_to_string(output).unwrap();
        assert!(contents.contains("Kreditkarte Premium"));
    }

    #[test]
    fn test_export_accounts_csv() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonexaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut ctx = Context::new(paths, Settings::default());
        let output = temp_dir.path().join("accounts.csv");

        handle_export_command(&mut ctx, ExportCommands::Accounts { output: output.clone() }).unwrap();

        let contents = std::fs::read_to_string(output).unwrap();
        assert_eq!(contents.lines().count(), 7);
    }

    #[test]
    fn test_unwritable_path_is_export_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonexaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut ctx = Context::new(paths, Settings::default());

        let err = handle_export_command(
            &mut ctx,
            ExportCommands::Transactions {
                output: temp_dir.path().join("missing").join("out.csv"),
            },
        )
        .unwrap_err();
        assert!(matches!(err, MonexaError::Export(_)));
    }
}
