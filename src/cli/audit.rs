//! Audit log command

use crate::error::MonexaResult;

use super::Context;

/// Print the last `limit` audit entries, oldest first
pub fn handle_audit_command(ctx: &mut Context, limit: usize) -> MonexaResult<()> {
    let Some(logger) = ctx.session.audit() else {
        println!("Audit logging is disabled (set \"audit_enabled\": true in the settings file).");
        return Ok(());
    };

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No audit entries in {}", logger.path().display());
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
