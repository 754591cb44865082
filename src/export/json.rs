//! JSON Export functionality
//!
//! Writes the session's accounts and transactions as one versioned document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{MonexaError, MonexaResult};
use crate::models::{Account, Transaction};
use crate::storage::Session;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full snapshot of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub accounts: Vec<Account>,

    pub transactions: Vec<Transaction>,

    pub metadata: ExportMetadata,
}

/// Counts and date range of the exported data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub account_count: usize,
    pub transaction_count: usize,
    /// Date of the earliest transaction (YYYY-MM-DD)
    pub earliest_transaction: Option<String>,
    /// Date of the latest transaction (YYYY-MM-DD)
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Snapshot the session's stores, in store order
    pub fn from_session(session: &Session) -> Self {
        let accounts: Vec<Account> = session.accounts.iter().cloned().collect();
        let transactions: Vec<Transaction> = session.transactions.iter().cloned().collect();

        let day = |t: &Transaction| t.date.format("%Y-%m-%d").to_string();
        let metadata = ExportMetadata {
            account_count: accounts.len(),
            transaction_count: transactions.len(),
            earliest_transaction: transactions.iter().min_by_key(|t| t.date).map(day),
            latest_transaction: transactions.iter().max_by_key(|t| t.date).map(day),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            accounts,
            transactions,
            metadata,
        }
    }
}

/// Serialize any value as JSON followed by a newline
pub fn write_json<T, W>(value: &T, writer: &mut W, pretty: bool) -> MonexaResult<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)
    } else {
        serde_json::to_writer(&mut *writer, value)
    };
    result.map_err(|e| MonexaError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| MonexaError::Export(e.to_string()))
}

/// Export the full session to JSON
pub fn export_full_json<W: Write>(
    session: &Session,
    writer: &mut W,
    pretty: bool,
) -> MonexaResult<()> {
    write_json(&FullExport::from_session(session), writer, pretty)
}
