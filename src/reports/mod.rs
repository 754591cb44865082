//! Reports module for Monexa
//!
//! Monthly income/expense figures and the dashboard overview.

pub mod summary;

pub use summary::{
    formatted_amount, monthly_expenses, monthly_income, monthly_net, MonthlySummary, Overview,
};
