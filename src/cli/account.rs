//! Account CLI commands
//!
//! Implements CLI commands for account management.

use clap::Subcommand;
use std::io;

use crate::display::{format_account_details, format_account_list};
use crate::error::{MonexaError, MonexaResult};
use crate::export::{write_accounts, OutputFormat};
use crate::models::{Account, AccountType, Money};
use crate::services::query::filter_accounts;
use crate::services::AccountService;

use super::{parse_choice, Context};

const VALID_ACCOUNT_TYPES: &str = "checking, savings, daily_money, credit_card, brokerage";

/// Account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// List accounts with the total balance of active accounts
    List {
        /// Only accounts whose name, bank or IBAN contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Show account details
    Show {
        /// Account name or ID
        account: String,
    },
    /// Create a new account
    Create {
        /// Account name
        name: String,
        /// Bank holding the account
        #[arg(short, long)]
        bank: String,
        /// Account type (checking, savings, daily_money, credit_card, brokerage)
        #[arg(short = 't', long = "type", default_value = "checking")]
        account_type: String,
        /// IBAN
        #[arg(long)]
        iban: Option<String>,
        /// Current balance (e.g., "1500.00", "1.500,00" or "-856,30")
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
        /// Currency code; defaults to the configured currency
        #[arg(long)]
        currency: Option<String>,
        /// Create the account as inactive
        #[arg(long)]
        inactive: bool,
        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Edit an account; unspecified fields keep their value
    Edit {
        /// Account name or ID
        account: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        bank: Option<String>,
        #[arg(short = 't', long = "type")]
        account_type: Option<String>,
        #[arg(long)]
        iban: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        balance: Option<String>,
        #[arg(long)]
        currency: Option<String>,
        /// Set whether the account counts towards the total balance
        #[arg(long)]
        active: Option<bool>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete an account
    Delete {
        /// Account name or ID
        account: String,
    },
}

fn parse_account_type(input: &str) -> MonexaResult<AccountType> {
    parse_choice("account type", input, AccountType::parse, VALID_ACCOUNT_TYPES)
}

fn parse_balance(input: &str) -> MonexaResult<Money> {
    Money::parse(input).map_err(|e| {
        MonexaError::Validation(format!(
            "Invalid balance format: '{}'. Use format like '1500.00' or '1.500,00'. Error: {}",
            input, e
        ))
    })
}

/// Handle an account command
pub fn handle_account_command(ctx: &mut Context, cmd: AccountCommands) -> MonexaResult<()> {
    let locale = ctx.settings.locale;

    match cmd {
        AccountCommands::List { search, format } => {
            let accounts = filter_accounts(&ctx.session.accounts, search.as_deref().unwrap_or(""));
            if format == OutputFormat::Table {
                print!(
                    "{}",
                    format_account_list(
                        &accounts,
                        ctx.session.accounts.total_active_balance(),
                        &ctx.settings.default_currency,
                        locale,
                    )
                );
                if accounts.is_empty() {
                    println!();
                }
            } else {
                write_accounts(format, &accounts, &mut io::stdout().lock())?;
            }
        }

        AccountCommands::Show { account } => {
            let service = AccountService::new(&mut ctx.session);
            let found = service
                .find(&account)
                .ok_or_else(|| MonexaError::account_not_found(&account))?;
            print!("{}", format_account_details(found, locale));
        }

        AccountCommands::Create {
            name,
            bank,
            account_type,
            iban,
            balance,
            currency,
            inactive,
            description,
        } => {
            let mut account =
                Account::with_balance(name, parse_account_type(&account_type)?, bank, parse_balance(&balance)?);
            account.iban = iban.unwrap_or_default();
            account.currency = currency.unwrap_or_else(|| ctx.settings.default_currency.clone());
            account.is_active = !inactive;
            account.description = description.unwrap_or_default();

            let created = AccountService::new(&mut ctx.session).create(account)?;
            println!("Created account: {} (ID {})", created.name, created.id);
        }

        AccountCommands::Edit {
            account,
            name,
            bank,
            account_type,
            iban,
            balance,
            currency,
            active,
            description,
        } => {
            let mut service = AccountService::new(&mut ctx.session);
            let mut fields = service
                .find(&account)
                .cloned()
                .ok_or_else(|| MonexaError::account_not_found(&account))?;
            let id = fields.id;

            if let Some(name) = name {
                fields.name = name;
            }
            if let Some(bank) = bank {
                fields.bank_name = bank;
            }
            if let Some(account_type) = account_type {
                fields.account_type = parse_account_type(&account_type)?;
            }
            if let Some(iban) = iban {
                fields.iban = iban;
            }
            if let Some(balance) = balance {
                fields.balance = parse_balance(&balance)?;
            }
            if let Some(currency) = currency {
                fields.currency = currency;
            }
            if let Some(active) = active {
                fields.is_active = active;
            }
            if let Some(description) = description {
                fields.description = description;
            }

            let updated = service
                .update(id, &fields)?
                .ok_or_else(|| MonexaError::account_not_found(id.to_string()))?;
            println!("Updated account: {}", updated.name);
        }

        AccountCommands::Delete { account } => {
            let mut service = AccountService::new(&mut ctx.session);
            let id = service.resolve(&account)?;
            if let Some(removed) = service.delete(id)? {
                println!("Deleted account: {}", removed.name);
            }
        }
    }

    Ok(())
}
