//! Transaction CLI commands

use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::Subcommand;
use std::io;

use crate::display::{format_grouped_transactions, format_transaction_details, format_transaction_list};
use crate::error::{MonexaError, MonexaResult};
use crate::export::{write_transactions, OutputFormat};
use crate::models::{Money, TransactionCategory, TransactionId, TransactionType};
use crate::services::query::{filter_transactions, group_by_month, TransactionFilter};
use crate::services::transaction::CreateTransactionInput;
use crate::services::{AccountService, TransactionService};

use super::{parse_choice, Context};

const VALID_TYPES: &str = "income, expense, transfer";
const VALID_CATEGORIES: &str = "salary, groceries, housing, utilities, savings, transport, \
                                shopping, leisure, health, other_income, other_expense";

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// List transactions, newest first
    List {
        /// Only transactions whose description or notes contain this text
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by account (name or ID)
        #[arg(short, long)]
        account: Option<String>,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by type (income, expense, transfer)
        #[arg(short = 't', long = "type")]
        transaction_type: Option<String>,
        /// Group the list by month
        #[arg(short, long)]
        grouped: bool,
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Show a single transaction
    Show {
        /// Transaction ID
        id: String,
    },
    /// Add a new transaction
    Add {
        /// Account name or ID (the debited account for transfers)
        account: String,
        /// Amount, always positive (e.g., "127.45" or "127,45")
        amount: String,
        /// Transaction type (income, expense, transfer)
        #[arg(short = 't', long = "type")]
        transaction_type: String,
        /// Category
        #[arg(short, long)]
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Date (YYYY-MM-DD, "YYYY-MM-DD HH:MM" or DD.MM.YYYY); defaults to now
        #[arg(long)]
        date: Option<String>,
        /// Destination account for transfers (name or ID)
        #[arg(long)]
        to: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

fn parse_transaction_id(input: &str) -> MonexaResult<TransactionId> {
    input
        .trim()
        .parse()
        .map_err(|_| MonexaError::transaction_not_found(input))
}

/// Parse a booking date; date-only input means midnight
pub(crate) fn parse_date(input: &str) -> MonexaResult<NaiveDateTime> {
    let input = input.trim();

    for format in ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(datetime);
        }
    }

    ["%Y-%m-%d", "%d.%m.%Y"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            MonexaError::Validation(format!(
                "Invalid date: '{}'. Use YYYY-MM-DD, 'YYYY-MM-DD HH:MM' or DD.MM.YYYY",
                input
            ))
        })
}

/// Handle a transaction command
pub fn handle_transaction_command(ctx: &mut Context, cmd: TransactionCommands) -> MonexaResult<()> {
    match cmd {
        TransactionCommands::List {
            search,
            account,
            category,
            transaction_type,
            grouped,
            format,
        } => {
            let mut filter = TransactionFilter::new().search(search.unwrap_or_default());
            if let Some(account) = account {
                filter = filter.account(AccountService::new(&mut ctx.session).resolve(&account)?);
            }
            if let Some(category) = category {
                filter = filter.category(parse_choice(
                    "category",
                    &category,
                    TransactionCategory::parse,
                    VALID_CATEGORIES,
                )?);
            }
            if let Some(transaction_type) = transaction_type {
                filter = filter.transaction_type(parse_choice(
                    "transaction type",
                    &transaction_type,
                    TransactionType::parse,
                    VALID_TYPES,
                )?);
            }

            let session = &ctx.session;
            let transactions = filter_transactions(&session.transactions, &filter);

            match format {
                OutputFormat::Table if grouped => {
                    let groups = group_by_month(&transactions);
                    print!(
                        "{}",
                        format_grouped_transactions(&groups, &session.accounts, &ctx.settings)
                    );
                }
                OutputFormat::Table => {
                    println!(
                        "{}",
                        format_transaction_list(&transactions, &session.accounts, &ctx.settings)
                    );
                }
                _ => write_transactions(
                    format,
                    &transactions,
                    &session.accounts,
                    &mut io::stdout().lock(),
                )?,
            }
        }

        TransactionCommands::Show { id } => {
            let id = parse_transaction_id(&id)?;
            let txn = ctx
                .session
                .transactions
                .get(id)
                .ok_or_else(|| MonexaError::transaction_not_found(id.to_string()))?;
            print!(
                "{}",
                format_transaction_details(txn, &ctx.session.accounts, &ctx.settings)
            );
        }

        TransactionCommands::Add {
            account,
            amount,
            transaction_type,
            category,
            description,
            date,
            to,
            notes,
        } => {
            let accounts = AccountService::new(&mut ctx.session);
            let account_id = accounts.resolve(&account)?;
            let to_account_id = to.as_deref().map(|to| accounts.resolve(to)).transpose()?;

            let amount = Money::parse(&amount).map_err(|e| {
                MonexaError::Validation(format!("Invalid amount: '{}'. Error: {}", amount, e))
            })?;
            let date = match date {
                Some(date) => parse_date(&date)?,
                None => Local::now().naive_local(),
            };

            let input = CreateTransactionInput {
                account_id,
                to_account_id,
                date,
                amount,
                transaction_type: parse_choice(
                    "transaction type",
                    &transaction_type,
                    TransactionType::parse,
                    VALID_TYPES,
                )?,
                category: parse_choice(
                    "category",
                    &category,
                    TransactionCategory::parse,
                    VALID_CATEGORIES,
                )?,
                description,
                notes,
            };

            let txn = TransactionService::new(&mut ctx.session).create(input)?;
            println!("Added transaction #{}", txn.id);
            print!(
                "{}",
                format_transaction_details(&txn, &ctx.session.accounts, &ctx.settings)
            );
        }

        TransactionCommands::Delete { id } => {
            let id = parse_transaction_id(&id)?;
            let removed = TransactionService::new(&mut ctx.session)
                .delete(id)?
                .ok_or_else(|| MonexaError::transaction_not_found(id.to_string()))?;
            println!("Deleted transaction #{} ({})", removed.id, removed.description);
        }
    }

    Ok(())
}
