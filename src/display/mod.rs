//! Display formatting for terminal output
//!
//! Locale-aware money and month formatting, German/English labels for the
//! domain enums, and the table and detail views built on them.

pub mod account;
pub mod summary;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use summary::format_overview;
pub use transaction::{format_grouped_transactions, format_transaction_details, format_transaction_list};

use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::config::Locale;
use crate::models::{AccountType, Money, TransactionCategory, TransactionType};
use crate::services::query::MonthKey;

const MONTHS_DE: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
    "Oktober", "November", "Dezember",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Pick the German or English variant of a label
pub(crate) fn pick(locale: Locale, de: &'static str, en: &'static str) -> &'static str {
    match locale {
        Locale::De => de,
        Locale::En => en,
    }
}

/// Symbol for a currency code; unknown codes are shown as-is
pub fn currency_symbol(code: &str) -> &str {
    match code.trim().to_uppercase().as_str() {
        "EUR" => "€",
        "USD" => "$",
        "GBP" => "£",
        _ => code.trim(),
    }
}

fn group_digits(mut units: i64, separator: char) -> String {
    let mut groups = Vec::new();
    loop {
        if units < 1000 {
            groups.push(units.to_string());
            break;
        }
        groups.push(format!("{:03}", units % 1000));
        units /= 1000;
    }
    groups.reverse();
    groups.join(&separator.to_string())
}

/// Format an amount with thousands grouping and currency
///
/// German: `1.234,56 €`, `-856,30 €`. English: `€1,234.56`, `-€856.30`.
pub fn format_money(amount: Money, currency: &str, locale: Locale) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let magnitude = amount.abs();
    let symbol = currency_symbol(currency);

    match locale {
        Locale::De => format!(
            "{}{},{:02} {}",
            sign,
            group_digits(magnitude.units(), '.'),
            magnitude.cents_part(),
            symbol
        ),
        Locale::En => {
            let spacer = if symbol.chars().count() > 1 { " " } else { "" };
            format!(
                "{}{}{}{}.{:02}",
                sign,
                symbol,
                spacer,
                group_digits(magnitude.units(), ','),
                magnitude.cents_part()
            )
        }
    }
}

/// Localized month heading, e.g. "Oktober 2024"
pub fn month_label(key: MonthKey, locale: Locale) -> String {
    let names = match locale {
        Locale::De => &MONTHS_DE,
        Locale::En => &MONTHS_EN,
    };
    let name = key
        .month
        .checked_sub(1)
        .and_then(|i| names.get(i as usize))
        .copied()
        .unwrap_or("?");
    format!("{} {}", name, key.year)
}

/// Format a date with a user-supplied strftime pattern
///
/// Falls back to `%d.%m.%Y` when chrono cannot render the pattern.
pub fn format_date(date: NaiveDateTime, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_ok() {
        return out;
    }
    date.format("%d.%m.%Y").to_string()
}

pub fn account_type_label(account_type: AccountType, locale: Locale) -> &'static str {
    match account_type {
        AccountType::Checking => pick(locale, "Girokonto", "Checking"),
        AccountType::Savings => pick(locale, "Sparkonto", "Savings"),
        AccountType::DailyMoney => pick(locale, "Tagesgeldkonto", "Daily money"),
        AccountType::CreditCard => pick(locale, "Kreditkarte", "Credit card"),
        AccountType::Brokerage => pick(locale, "Depot", "Brokerage"),
    }
}

pub fn category_label(category: TransactionCategory, locale: Locale) -> &'static str {
    use TransactionCategory as C;
    match category {
        C::Salary => pick(locale, "Gehalt", "Salary"),
        C::Groceries => pick(locale, "Lebensmittel", "Groceries"),
        C::Housing => pick(locale, "Wohnen", "Housing"),
        C::Utilities => pick(locale, "Nebenkosten", "Utilities"),
        C::Savings => pick(locale, "Sparen", "Savings"),
        C::Transport => pick(locale, "Transport", "Transport"),
        C::Shopping => pick(locale, "Shopping", "Shopping"),
        C::Leisure => pick(locale, "Freizeit", "Leisure"),
        C::Health => pick(locale, "Gesundheit", "Health"),
        C::OtherIncome => pick(locale, "Sonstige Einnahmen", "Other income"),
        C::OtherExpense => pick(locale, "Sonstige Ausgaben", "Other expenses"),
    }
}

pub fn transaction_type_label(transaction_type: TransactionType, locale: Locale) -> &'static str {
    match transaction_type {
        TransactionType::Income => pick(locale, "Einnahme", "Income"),
        TransactionType::Expense => pick(locale, "Ausgabe", "Expense"),
        TransactionType::Transfer => pick(locale, "Umbuchung", "Transfer"),
    }
}

pub(crate) fn yes_no(value: bool, locale: Locale) -> &'static str {
    if value {
        pick(locale, "Ja", "Yes")
    } else {
        pick(locale, "Nein", "No")
    }
}
