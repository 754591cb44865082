//! Monexa - personal finance tracking for accounts and transactions
//!
//! This library provides the core of the Monexa finance tracker: in-memory
//! account and transaction stores, transaction queries, and monthly
//! income/expense summaries, plus the terminal front end built on them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, transactions, money, ids)
//! - `storage`: In-memory stores owned by a `Session`
//! - `services`: Validation, mutations and transaction queries
//! - `reports`: Monthly summary and dashboard overview
//! - `audit`: Audit logging system
//! - `display`: Locale-aware terminal formatting
//! - `export`: JSON, CSV and YAML output
//! - `cli`: Command tree and handlers
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use monexa::reports::summary::monthly_net;
//! use monexa::storage::Session;
//!
//! let session = Session::with_sample_data();
//! let october = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
//! assert_eq!(monthly_net(&session.transactions, october).cents(), 278636);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{MonexaError, MonexaResult};
