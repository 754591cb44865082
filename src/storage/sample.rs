//! Demo data
//!
//! Six accounts and the October 2024 transactions the CLI starts from.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{
    Account, AccountId, AccountType, Money, Transaction, TransactionCategory, TransactionType,
};

use super::{AccountStore, TransactionStore};

fn account(
    name: &str,
    account_type: AccountType,
    bank_name: &str,
    iban: &str,
    balance: Money,
    description: &str,
) -> Account {
    let mut account = Account::with_balance(name, account_type, bank_name, balance);
    account.iban = iban.to_string();
    account.description = description.to_string();
    account
}

fn october(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 10, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

fn booking(
    day: u32,
    description: &str,
    amount: Money,
    transaction_type: TransactionType,
    category: TransactionCategory,
    account_id: u32,
    notes: Option<&str>,
) -> Transaction {
    Transaction::with_details(
        AccountId::new(account_id),
        october(day),
        amount,
        transaction_type,
        category,
        description,
        notes.map(str::to_string),
    )
}

/// Seed accounts, ids 1 through 6
pub fn sample_accounts() -> AccountStore {
    let mut store = AccountStore::new();

    store.add(account(
        "Hauptkonto",
        AccountType::Checking,
        "Sparkasse",
        "DE89 3704 0044 0532 0130 00",
        Money::from_units_cents(5432, 50),
        "Hauptkonto für alltägliche Transaktionen",
    ));
    store.add(account(
        "Sparkonto",
        AccountType::Savings,
        "Sparkasse",
        "DE89 3704 0044 0532 0130 01",
        Money::from_units_cents(15000, 0),
        "Rücklagen für größere Anschaffungen",
    ));
    store.add(account(
        "Tagesgeldkonto",
        AccountType::DailyMoney,
        "ING",
        "DE89 5001 0517 0123 4567 89",
        Money::from_units_cents(25000, 0),
        "Tagesgeld mit 3,5% Zinsen",
    ));
    store.add(account(
        "Kreditkarte Premium",
        AccountType::CreditCard,
        "Deutsche Bank",
        "DE89 1001 0010 0123 4567 89",
        Money::from_cents(-85630),
        "Kreditkarte für Reisen und Online-Einkäufe",
    ));
    store.add(account(
        "Depot",
        AccountType::Brokerage,
        "Trade Republic",
        "DE89 6001 0075 0123 4567 89",
        Money::from_units_cents(42500, 75),
        "Wertpapierdepot für langfristigen Vermögensaufbau",
    ));

    let mut old = account(
        "Altes Girokonto",
        AccountType::Checking,
        "Hamburger Sparkasse",
        "DE89 2005 0550 1234 5678 90",
        Money::from_units_cents(127, 85),
        "Nicht mehr genutztes Konto",
    );
    old.is_active = false;
    store.add(old);

    store
}

/// Seed transactions, ids 1 through 10, referencing [`sample_accounts`]
pub fn sample_transactions() -> TransactionStore {
    use TransactionCategory as C;
    use TransactionType::{Expense, Income};

    let mut store = TransactionStore::new();

    store.add(booking(1, "Gehalt Oktober", Money::from_units_cents(3500, 0), Income, C::Salary, 1, Some("Monatliches Gehalt")));
    store.add(booking(3, "Miete", Money::from_units_cents(950, 0), Expense, C::Housing, 1, Some("Kaltmiete Wohnung")));
    store.add(booking(5, "REWE Einkauf", Money::from_units_cents(127, 45), Expense, C::Groceries, 1, None));
    store.add(booking(5, "Strom & Gas", Money::from_units_cents(145, 0), Expense, C::Utilities, 1, Some("Monatlicher Abschlag")));
    store.add(Transaction::transfer(
        AccountId::new(1),
        AccountId::new(2),
        october(6),
        Money::from_units_cents(500, 0),
        "Überweisung auf Sparkonto",
    ));
    store.add(booking(8, "Tankstelle", Money::from_units_cents(65, 80), Expense, C::Transport, 4, None));
    store.add(booking(10, "Amazon Bestellung", Money::from_units_cents(89, 99), Expense, C::Shopping, 4, None));
    store.add(booking(12, "Freelance Projekt", Money::from_units_cents(750, 0), Income, C::OtherIncome, 1, Some("Webdesign Projekt")));
    store.add(booking(14, "Restaurant", Money::from_units_cents(45, 50), Expense, C::Leisure, 4, None));
    store.add(booking(15, "Fitnessstudio", Money::from_units_cents(39, 90), Expense, C::Health, 1, Some("Monatsbeitrag")));

    store
}
