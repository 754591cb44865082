//! Transaction display formatting

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::config::Settings;
use crate::models::Transaction;
use crate::reports::summary::formatted_amount;
use crate::services::query::{account_name, MonthGroup};
use crate::storage::AccountStore;

use super::{category_label, format_date, month_label, pick, transaction_type_label};

/// Currency of the transaction's source account, else the default
fn currency_for<'a>(txn: &Transaction, accounts: &'a AccountStore, settings: &'a Settings) -> &'a str {
    accounts
        .get(txn.account_id)
        .map(|a| a.currency.as_str())
        .unwrap_or(settings.default_currency.as_str())
}

fn account_column(txn: &Transaction, accounts: &AccountStore) -> String {
    let from = account_name(accounts, txn.account_id);
    match txn.to_account_id {
        Some(to) => format!("{} → {}", from, account_name(accounts, to)),
        None => from.to_string(),
    }
}

fn build_table(transactions: &[&Transaction], accounts: &AccountStore, settings: &Settings) -> String {
    let locale = settings.locale;
    let mut builder = Builder::default();
    builder.push_record([
        "ID",
        pick(locale, "Datum", "Date"),
        pick(locale, "Beschreibung", "Description"),
        pick(locale, "Kategorie", "Category"),
        pick(locale, "Konto", "Account"),
        pick(locale, "Betrag", "Amount"),
    ]);

    for txn in transactions {
        builder.push_record([
            txn.id.to_string(),
            format_date(txn.date, &settings.date_format),
            txn.description.clone(),
            category_label(txn.category, locale).to_string(),
            account_column(txn, accounts),
            formatted_amount(txn, currency_for(txn, accounts, settings), locale),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table.modify(Columns::single(5), Alignment::right());
    table.to_string()
}

fn empty_message(settings: &Settings) -> String {
    pick(settings.locale, "Keine Transaktionen gefunden.", "No transactions found.").to_string()
}

/// Format transactions as a single table, in the given order
pub fn format_transaction_list(
    transactions: &[&Transaction],
    accounts: &AccountStore,
    settings: &Settings,
) -> String {
    if transactions.is_empty() {
        return empty_message(settings);
    }
    build_table(transactions, accounts, settings)
}

/// Format month groups, each under its localized month heading
pub fn format_grouped_transactions(
    groups: &[MonthGroup<'_>],
    accounts: &AccountStore,
    settings: &Settings,
) -> String {
    if groups.is_empty() {
        return empty_message(settings);
    }

    groups
        .iter()
        .map(|group| {
            format!(
                "{}\n{}\n",
                month_label(group.key, settings.locale),
                build_table(&group.transactions, accounts, settings)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single transaction's details
pub fn format_transaction_details(
    txn: &Transaction,
    accounts: &AccountStore,
    settings: &Settings,
) -> String {
    let locale = settings.locale;
    let mut output = String::new();

    output.push_str(&format!(
        "{} #{}: {}\n",
        pick(locale, "Transaktion", "Transaction"),
        txn.id,
        txn.description
    ));
    output.push_str(&format!(
        "  {:<14} {}\n",
        format!("{}:", pick(locale, "Datum", "Date")),
        format_date(txn.date, &settings.date_format)
    ));
    output.push_str(&format!(
        "  {:<14} {}\n",
        format!("{}:", pick(locale, "Art", "Type")),
        transaction_type_label(txn.transaction_type, locale)
    ));
    output.push_str(&format!(
        "  {:<14} {}\n",
        format!("{}:", pick(locale, "Kategorie", "Category")),
        category_label(txn.category, locale)
    ));
    output.push_str(&format!(
        "  {:<14} {}\n",
        format!("{}:", pick(locale, "Konto", "Account")),
        account_column(txn, accounts)
    ));
    output.push_str(&format!(
        "  {:<14} {}\n",
        format!("{}:", pick(locale, "Betrag", "Amount")),
        formatted_amount(txn, currency_for(txn, accounts, settings), locale)
    ));

    if let Some(notes) = &txn.notes {
        output.push_str(&format!(
            "  {:<14} {}\n",
            format!("{}:", pick(locale, "Notizen", "Notes")),
            notes
        ));
    }

    output
}
