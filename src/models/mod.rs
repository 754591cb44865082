//! Core data models for Monexa
//!
//! This module contains the data structures of the finance domain: accounts,
//! transactions, categories, ids and money.

pub mod account;
pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::{Account, AccountType, AccountValidationError, DEFAULT_CURRENCY};
pub use category::TransactionCategory;
pub use ids::{AccountId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
