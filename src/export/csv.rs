//! CSV Export functionality
//!
//! Flat, spreadsheet-friendly rows. Amounts are plain decimals with a dot
//! separator; account references are resolved to names.

use serde::Serialize;
use std::io::Write;

use crate::error::{MonexaError, MonexaResult};
use crate::models::{Account, Transaction};
use crate::services::query::account_name;
use crate::storage::AccountStore;

#[derive(Debug, Serialize)]
struct AccountRow<'a> {
    id: u32,
    name: &'a str,
    #[serde(rename = "type")]
    account_type: String,
    bank_name: &'a str,
    iban: &'a str,
    balance: String,
    currency: &'a str,
    is_active: bool,
    description: &'a str,
}

#[derive(Debug, Serialize)]
struct TransactionRow<'a> {
    id: u32,
    date: String,
    description: &'a str,
    #[serde(rename = "type")]
    transaction_type: String,
    category: String,
    amount: String,
    account: &'a str,
    to_account: &'a str,
    notes: &'a str,
}

fn export_error(e: csv::Error) -> MonexaError {
    MonexaError::Export(e.to_string())
}

/// Write accounts as CSV with a header row
pub fn export_accounts_csv<W: Write>(accounts: &[&Account], writer: &mut W) -> MonexaResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for account in accounts {
        csv_writer
            .serialize(AccountRow {
                id: account.id.get(),
                name: &account.name,
                account_type: account.account_type.to_string(),
                bank_name: &account.bank_name,
                iban: &account.iban,
                balance: account.balance.to_string(),
                currency: &account.currency,
                is_active: account.is_active,
                description: &account.description,
            })
            .map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| MonexaError::Export(e.to_string()))
}

/// Write transactions as CSV with a header row
pub fn export_transactions_csv<W: Write>(
    transactions: &[&Transaction],
    accounts: &AccountStore,
    writer: &mut W,
) -> MonexaResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for txn in transactions {
        csv_writer
            .serialize(TransactionRow {
                id: txn.id.get(),
                date: txn.date.format("%Y-%m-%d %H:%M").to_string(),
                description: &txn.description,
                transaction_type: txn.transaction_type.to_string(),
                category: txn.category.to_string(),
                amount: txn.amount.to_string(),
                account: account_name(accounts, txn.account_id),
                to_account: txn
                    .to_account_id
                    .map(|id| account_name(accounts, id))
                    .unwrap_or_default(),
                notes: txn.notes.as_deref().unwrap_or_default(),
            })
            .map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| MonexaError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::query::{filter_transactions, TransactionFilter};
    use crate::storage::sample::{sample_accounts, sample_transactions};

    #[test]
    fn test_export_accounts_csv() {
        let store = sample_accounts();
        let accounts: Vec<_> = store.iter().collect();
        let mut buffer = Vec::new();
        export_accounts_csv(&accounts, &mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("id,name,type,bank_name,iban,balance,currency,is_active,description")
        );
        assert_eq!(csv.lines().count(), 7);
        assert!(csv.contains("4,Kreditkarte Premium,Credit Card,Deutsche Bank,"));
        assert!(csv.contains(",-856.30,EUR,true,"));
        // commas inside fields are quoted
        assert!(csv.contains("\"Tagesgeld mit 3,5% Zinsen\""));
    }

    #[test]
    fn test_export_transactions_csv() {
        let accounts = sample_accounts();
        let store = sample_transactions();
        let filter = TransactionFilter::new().category(crate::models::TransactionCategory::Savings);
        let txns = filter_transactions(&store, &filter);

        let mut buffer = Vec::new();
        export_transactions_csv(&txns, &accounts, &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains(
            "5,2024-10-06 00:00,Überweisung auf Sparkonto,Transfer,Savings,500.00,Hauptkonto,Sparkonto,"
        ));
    }

    #[test]
    fn test_empty_export_writes_nothing() {
        let mut buffer = Vec::new();
        export_accounts_csv(&[], &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }
}
