//! Line-oriented shell
//!
//! Reads commands from stdin and runs each against the same [`Context`], so
//! accounts and transactions created on one line are visible on the next.

use clap::Parser;
use std::io::{self, BufRead, Write};

use crate::error::{MonexaError, MonexaResult};

use crate::config::Locale;

use super::{parse_locale, run, Commands, Context};

/// One shell line, parsed with the regular command tree
#[derive(Parser, Debug)]
#[command(name = "monexa", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    /// Display locale for this line only (de, en)
    #[arg(long, global = true, value_parser = parse_locale)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Commands,
}

/// Split a line into words
///
/// Words are separated by whitespace; single or double quotes group words
/// and a backslash escapes the next character.
pub fn tokenize(line: &str) -> MonexaResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (_, '\\') => {
                let escaped = chars
                    .next()
                    .ok_or_else(|| MonexaError::Validation("Trailing backslash".into()))?;
                current.push(escaped);
                in_word = true;
            }
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(MonexaError::Validation(format!("Unclosed quote {}", q)));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Run one shell line; returns false when the shell should stop
fn run_line(ctx: &mut Context, line: &str) -> bool {
    let words = match tokenize(line) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Error: {}", e);
            return true;
        }
    };

    match words.first().map(String::as_str) {
        None => return true,
        Some("exit" | "quit") => return false,
        Some(_) => {}
    }

    match ShellLine::try_parse_from(&words) {
        Ok(ShellLine {
            command: Commands::Shell,
            ..
        }) => eprintln!("Already in the shell."),
        Ok(ShellLine { locale, command }) => {
            let session_locale = ctx.settings.locale;
            if let Some(locale) = locale {
                ctx.settings.locale = locale;
            }
            let result = run(ctx, command);
            ctx.settings.locale = session_locale;
            if let Err(e) = result {
                eprintln!("Error: {}", e);
            }
        }
        // help and usage errors are printed by clap itself
        Err(e) => {
            let _ = e.print();
        }
    }
    true
}

/// Read and run commands until end of input or `exit`
pub fn run_shell(ctx: &mut Context) -> MonexaResult<()> {
    let stdin = io::stdin();
    let interactive = std::io::IsTerminal::is_terminal(&stdin);

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("monexa> ");
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        if !run_line(ctx, &line?) {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MonexaPaths, Settings};
    use crate::models::TransactionId;
    use tempfile::TempDir;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize(r#"account create "Kasse 2" --bank 'Spar kasse'"#).unwrap(),
            vec!["account", "create", "Kasse 2", "--bank", "Spar kasse"]
        );
        assert_eq!(tokenize("  a   b ").unwrap(), vec!["a", "b"]);
        assert_eq!(tokenize(r"Strom\ &\ Gas").unwrap(), vec!["Strom & Gas"]);
        assert_eq!(tokenize(r#"--notes """#).unwrap(), vec!["--notes", ""]);
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("\"offen").is_err());
        assert!(tokenize("x\\").is_err());
    }

    #[test]
    fn test_locale_flag_applies_to_one_line() {
        let line = ShellLine::try_parse_from(["account", "list", "--locale", "en"]).unwrap();
        assert_eq!(line.locale, Some(Locale::En));
        assert!(ShellLine::try_parse_from(["--locale", "fr", "config"]).is_err());

        let temp_dir = TempDir::new().unwrap();
        let paths = MonexaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut ctx = Context::new(paths, Settings::default());

        assert!(run_line(&mut ctx, "--locale en account list"));
        assert_eq!(ctx.settings.locale, Locale::De);
    }

    #[test]
    fn test_lines_share_one_session() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonexaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut ctx = Context::new(paths, Settings::default());

        assert!(run_line(
            &mut ctx,
            r#"transaction add Hauptkonto 12,50 --type expense --category leisure -d "Kino""#
        ));
        assert!(run_line(&mut ctx, "transaction delete 1"));
        assert!(run_line(&mut ctx, "not-a-command"));
        assert!(run_line(&mut ctx, "shell"));
        assert!(!run_line(&mut ctx, "exit"));

        let kino = ctx.session.transactions.get(TransactionId::new(11)).unwrap();
        assert_eq!(kino.amount.cents(), 1250);
        assert!(ctx.session.transactions.get(TransactionId::new(1)).is_none());
    }
}
