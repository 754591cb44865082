//! Service layer for Monexa
//!
//! The service layer provides business logic on top of the stores: input
//! validation, audit logging of mutations, and read-only queries.

pub mod account;
pub mod query;
pub mod transaction;

pub use account::AccountService;
pub use query::{
    account_name, filter_accounts, filter_transactions, group_by_month, MonthGroup, MonthKey,
    TransactionFilter,
};
pub use transaction::{CreateTransactionInput, TransactionService};
