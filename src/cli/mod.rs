//! CLI command handlers
//!
//! This module contains the clap command tree and the handlers that bridge
//! parsed arguments to the service layer. The same tree serves the binary's
//! arguments and every line typed into `monexa shell`.

pub mod account;
pub mod audit;
pub mod export;
pub mod shell;
pub mod summary;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use audit::handle_audit_command;
pub use export::{handle_export_command, ExportCommands};
pub use shell::run_shell;
pub use summary::handle_summary_command;
pub use transaction::{handle_transaction_command, TransactionCommands};

use clap::{Parser, Subcommand};

use crate::config::{Locale, MonexaPaths, Settings};
use crate::error::{MonexaError, MonexaResult};
use crate::storage::Session;

#[derive(Parser, Debug)]
#[command(
    name = "monexa",
    version,
    about = "Personal finance tracker for accounts and transactions",
    long_about = "Monexa keeps track of bank, savings, credit card and brokerage \
                  accounts and the transactions booked on them. It starts from a \
                  demo data set; use `monexa shell` to run several commands \
                  against the same session."
)]
pub struct Cli {
    /// Display locale for amounts and month names (de, en)
    #[arg(long, global = true, value_parser = parse_locale, env = "MONEXA_LOCALE")]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Show balances and the income/expense summary of a month
    Summary {
        /// Month to summarize (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Export data to a file
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the effective settings (including --locale) to the settings file
        #[arg(long)]
        save: bool,
    },

    /// Read commands from stdin, one per line, against a single session
    Shell,
}

/// Everything a command handler may touch
pub struct Context {
    pub paths: MonexaPaths,
    pub settings: Settings,
    pub session: Session,
}

impl Context {
    /// Demo session, with audit logging when the settings enable it
    pub fn new(paths: MonexaPaths, settings: Settings) -> Self {
        let session = if settings.audit_enabled {
            Session::with_sample_data().with_audit(&paths)
        } else {
            Session::with_sample_data()
        };

        Self {
            paths,
            settings,
            session,
        }
    }
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    Locale::parse(s).ok_or_else(|| format!("unknown locale '{}' (expected de or en)", s))
}

/// Run one command against the context
pub fn run(ctx: &mut Context, command: Commands) -> MonexaResult<()> {
    match command {
        Commands::Account(cmd) => handle_account_command(ctx, cmd),
        Commands::Transaction(cmd) => handle_transaction_command(ctx, cmd),
        Commands::Summary { month } => handle_summary_command(ctx, month.as_deref()),
        Commands::Export(cmd) => handle_export_command(ctx, cmd),
        Commands::Audit { limit } => handle_audit_command(ctx, limit),
        Commands::Config { save } => {
            if save {
                ctx.settings.save(&ctx.paths)?;
                println!("Settings written to {}", ctx.paths.settings_file().display());
                println!();
            }
            print_config(ctx);
            Ok(())
        }
        Commands::Shell => run_shell(ctx),
    }
}

fn print_config(ctx: &Context) {
    println!("Monexa Configuration");
    println!("====================");
    println!("Base directory:  {}", ctx.paths.base_dir().display());
    println!("Settings file:   {}", ctx.paths.settings_file().display());
    println!("Audit log:       {}", ctx.paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Locale:           {}", ctx.settings.locale);
    println!("  Default currency: {}", ctx.settings.default_currency);
    println!("  Date format:      {}", ctx.settings.date_format);
    println!("  Audit log:        {}", if ctx.settings.audit_enabled { "enabled" } else { "disabled" });
}

/// Parse an enum-like argument, listing the valid values on failure
pub(crate) fn parse_choice<T>(
    what: &str,
    input: &str,
    parse: impl Fn(&str) -> Option<T>,
    valid: &str,
) -> MonexaResult<T> {
    parse(input).ok_or_else(|| {
        MonexaError::Validation(format!(
            "Invalid {}: '{}'. Valid values: {}",
            what, input, valid
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_locale_flag() {
        let cli = Cli::try_parse_from(["monexa", "summary", "--locale", "en-US"]).unwrap();
        assert_eq!(cli.locale, Some(Locale::En));
        assert!(matches!(cli.command, Some(Commands::Summary { month: None })));

        assert!(Cli::try_parse_from(["monexa", "--locale", "fr", "config"]).is_err());
    }

    #[test]
    fn test_parse_choice_lists_valid_values() {
        let err = parse_choice("type", "foo", crate::models::TransactionType::parse, "income, expense")
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("income, expense"));
    }

    #[test]
    fn test_config_save_writes_effective_settings() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let paths = MonexaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            locale: Locale::En,
            ..Settings::default()
        };
        let mut ctx = Context::new(paths.clone(), settings);

        run(&mut ctx, Commands::Config { save: true }).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.locale, Locale::En);
    }

    #[test]
    fn test_context_respects_audit_setting() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let paths = MonexaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        assert!(Context::new(paths.clone(), settings).session.audit().is_none());
        assert!(Context::new(paths, Settings::default()).session.audit().is_some());
    }
}
