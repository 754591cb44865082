//! Monthly summary
//!
//! Income, expense and net figures for a calendar month, plus the dashboard
//! overview of account balances.

use chrono::{Local, NaiveDate};

use crate::config::Locale;
use crate::display::format_money;
use crate::models::{AccountType, Money, Transaction, TransactionType};
use crate::services::query::MonthKey;
use crate::storage::{AccountStore, Session, TransactionStore};

fn month_total(
    store: &TransactionStore,
    reference: NaiveDate,
    transaction_type: TransactionType,
) -> Money {
    store
        .iter()
        .filter(|t| t.transaction_type == transaction_type && t.in_month_of(reference))
        .map(|t| t.amount)
        .sum()
}

/// Income booked in the month of `reference`
pub fn monthly_income(store: &TransactionStore, reference: NaiveDate) -> Money {
    month_total(store, reference, TransactionType::Income)
}

/// Expenses booked in the month of `reference`; transfers are not expenses
pub fn monthly_expenses(store: &TransactionStore, reference: NaiveDate) -> Money {
    month_total(store, reference, TransactionType::Expense)
}

/// Income minus expenses for the month of `reference`
pub fn monthly_net(store: &TransactionStore, reference: NaiveDate) -> Money {
    monthly_income(store, reference) - monthly_expenses(store, reference)
}

/// Income minus expenses for the current month
pub fn current_monthly_net(store: &TransactionStore) -> Money {
    monthly_net(store, today())
}

/// Local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Signed, currency-formatted amount: "+ 3.500,00 €", "- 950,00 €"
pub fn formatted_amount(txn: &Transaction, currency: &str, locale: Locale) -> String {
    format!(
        "{} {}",
        txn.transaction_type.sign_prefix(),
        format_money(txn.amount, currency, locale)
    )
}

/// Income, expenses and net of one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    pub month: MonthKey,
    pub income: Money,
    pub expenses: Money,
    pub net: Money,
    /// Transactions of any type booked in the month
    pub transaction_count: usize,
}

impl MonthlySummary {
    /// Summarize the month `reference` falls in
    pub fn generate(store: &TransactionStore, reference: NaiveDate) -> Self {
        let income = monthly_income(store, reference);
        let expenses = monthly_expenses(store, reference);

        Self {
            month: MonthKey::of(&reference),
            income,
            expenses,
            net: income - expenses,
            transaction_count: store.iter().filter(|t| t.in_month_of(reference)).count(),
        }
    }
}

/// Balance total of one account type over active accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeBalance {
    pub account_type: AccountType,
    pub count: usize,
    pub balance: Money,
}

/// Dashboard figures: balances across accounts plus the month's summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub total_active_balance: Money,
    pub active_accounts: usize,
    pub inactive_accounts: usize,
    /// Active balances per account type, in declaration order; empty types omitted
    pub by_type: Vec<TypeBalance>,
    pub month: MonthlySummary,
}

impl Overview {
    pub fn generate(session: &Session, reference: NaiveDate) -> Self {
        let accounts = &session.accounts;
        let active_accounts = accounts.iter().filter(|a| a.is_active).count();

        Self {
            total_active_balance: accounts.total_active_balance(),
            active_accounts,
            inactive_accounts: accounts.len() - active_accounts,
            by_type: balances_by_type(accounts),
            month: MonthlySummary::generate(&session.transactions, reference),
        }
    }
}

fn balances_by_type(accounts: &AccountStore) -> Vec<TypeBalance> {
    AccountType::ALL
        .iter()
        .filter_map(|&account_type| {
            let members = accounts.filter(|a| a.is_active && a.account_type == account_type);
            if members.is_empty() {
                return None;
            }
            Some(TypeBalance {
                account_type,
                count: members.len(),
                balance: members.iter().map(|a| a.balance).sum(),
            })
        })
        .collect()
}
