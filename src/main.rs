use anyhow::Result;
use clap::Parser;

use monexa::cli::{run, Cli, Context};
use monexa::config::{MonexaPaths, Settings};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = MonexaPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(locale) = cli.locale {
        settings.locale = locale;
    }

    let mut ctx = Context::new(paths, settings);

    match cli.command {
        Some(command) => run(&mut ctx, command)?,
        None => {
            println!("Monexa - personal finance tracker");
            println!();
            println!("Run 'monexa --help' for usage information.");
            println!("Run 'monexa shell' to work with one session interactively.");
        }
    }

    Ok(())
}
