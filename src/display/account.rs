//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::config::Locale;
use crate::models::{Account, Money};

use super::{account_type_label, format_money, pick, yes_no};

/// Format accounts as a table followed by the total over active accounts
pub fn format_account_list(
    accounts: &[&Account],
    total_active: Money,
    currency: &str,
    locale: Locale,
) -> String {
    if accounts.is_empty() {
        return pick(locale, "Keine Konten gefunden.", "No accounts found.").to_string();
    }

    let mut builder = Builder::default();
    builder.push_record([
        "ID",
        "Name",
        pick(locale, "Typ", "Type"),
        "Bank",
        "IBAN",
        pick(locale, "Saldo", "Balance"),
        "Status",
    ]);

    for account in accounts {
        let status = if account.is_active {
            pick(locale, "Aktiv", "Active")
        } else {
            pick(locale, "Inaktiv", "Inactive")
        };
        builder.push_record([
            account.id.to_string(),
            account.name.clone(),
            account_type_label(account.account_type, locale).to_string(),
            account.bank_name.clone(),
            account.iban.clone(),
            format_money(account.balance, &account.currency, locale),
            status.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table.modify(Columns::single(5), Alignment::right());

    format!(
        "{}\n\n{}: {}\n",
        table,
        pick(locale, "Gesamtsaldo (aktive Konten)", "Total balance (active accounts)"),
        format_money(total_active, currency, locale)
    )
}

/// Format a single account's details
pub fn format_account_details(account: &Account, locale: Locale) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", pick(locale, "Konto", "Account"), account.name));
    output.push_str(&format!("  ID:           {}\n", account.id));
    output.push_str(&format!(
        "  {:<13} {}\n",
        format!("{}:", pick(locale, "Typ", "Type")),
        account_type_label(account.account_type, locale)
    ));
    output.push_str(&format!("  Bank:         {}\n", account.bank_name));
    if !account.iban.is_empty() {
        output.push_str(&format!("  IBAN:         {}\n", account.iban));
    }
    output.push_str(&format!(
        "  {:<13} {}\n",
        format!("{}:", pick(locale, "Saldo", "Balance")),
        format_money(account.balance, &account.currency, locale)
    ));
    output.push_str(&format!(
        "  {:<13} {}\n",
        format!("{}:", pick(locale, "Währung", "Currency")),
        account.currency
    ));
    output.push_str(&format!(
        "  {:<13} {}\n",
        format!("{}:", pick(locale, "Aktiv", "Active")),
        yes_no(account.is_active, locale)
    ));

    if !account.description.is_empty() {
        output.push('\n');
        output.push_str(&format!("  {}\n", account.description));
    }

    output
}
