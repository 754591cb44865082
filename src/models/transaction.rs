//! Transaction model
//!
//! Represents dated financial movements. The amount is always a non-negative
//! magnitude; the direction comes from the transaction type.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::TransactionCategory;
use super::ids::{AccountId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Einnahme
    Income,
    /// Ausgabe
    Expense,
    /// Umbuchung between two accounts
    Transfer,
}

impl TransactionType {
    /// Sign shown in front of the amount: `+` for income, `-` otherwise
    pub fn sign_prefix(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense | Self::Transfer => '-',
        }
    }

    /// Parse a transaction type from its English or German name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "einnahme" => Some(Self::Income),
            "expense" | "ausgabe" => Some(Self::Expense),
            "transfer" | "umbuchung" => Some(Self::Transfer),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Transfer => write!(f, "Transfer"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier assigned by the transaction store
    pub id: TransactionId,

    #[serde(default)]
    pub description: String,

    /// Non-negative magnitude
    pub amount: Money,

    pub date: NaiveDateTime,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    pub category: TransactionCategory,

    /// Source account; for transfers, the debited account
    pub account_id: AccountId,

    /// Destination account, only for transfers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account_id: Option<AccountId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// The id is a placeholder until the transaction store assigns one.
    pub fn new(
        account_id: AccountId,
        date: NaiveDateTime,
        amount: Money,
        transaction_type: TransactionType,
        category: TransactionCategory,
    ) -> Self {
        Self {
            id: TransactionId::FIRST,
            description: String::new(),
            amount,
            date,
            transaction_type,
            category,
            account_id,
            to_account_id: None,
            notes: None,
        }
    }

    /// Create a transaction with a description and optional notes
    pub fn with_details(
        account_id: AccountId,
        date: NaiveDateTime,
        amount: Money,
        transaction_type: TransactionType,
        category: TransactionCategory,
        description: impl Into<String>,
        notes: Option<String>,
    ) -> Self {
        let mut txn = Self::new(account_id, date, amount, transaction_type, category);
        txn.description = description.into();
        txn.notes = notes;
        txn
    }

    /// Create a transfer from `account_id` to `to_account_id`
    pub fn transfer(
        account_id: AccountId,
        to_account_id: AccountId,
        date: NaiveDateTime,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(
            account_id,
            date,
            amount,
            TransactionType::Transfer,
            TransactionCategory::Savings,
        );
        txn.to_account_id = Some(to_account_id);
        txn.description = description.into();
        txn
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    pub fn is_transfer(&self) -> bool {
        self.transaction_type == TransactionType::Transfer
    }

    /// Whether the transaction falls in the same calendar month and year as `reference`
    pub fn in_month_of(&self, reference: NaiveDate) -> bool {
        self.date.year() == reference.year() && self.date.month() == reference.month()
    }

    /// Case-insensitive substring match on description or notes
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.description.to_lowercase().contains(&needle)
            || self
                .notes
                .as_deref()
                .is_some_and(|notes| notes.to_lowercase().contains(&needle))
    }

    /// Validate amount and transfer destination
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        match (self.is_transfer(), self.to_account_id) {
            (true, None) => Err(TransactionValidationError::TransferWithoutDestination),
            (true, Some(to)) if to == self.account_id => {
                Err(TransactionValidationError::TransferToSameAccount)
            }
            (false, Some(_)) => Err(TransactionValidationError::DestinationWithoutTransfer),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.transaction_type.sign_prefix(),
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    TransferWithoutDestination,
    TransferToSameAccount,
    DestinationWithoutTransfer,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => write!(
                f,
                "Amount must not be negative ({}); the type sets the direction",
                amount
            ),
            Self::TransferWithoutDestination => {
                write!(f, "Transfer transactions need a destination account")
            }
            Self::TransferToSameAccount => {
                write!(f, "Transfer destination must differ from the source account")
            }
            Self::DestinationWithoutTransfer => {
                write!(f, "Only transfer transactions can have a destination account")
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
