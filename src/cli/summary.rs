//! Summary command

use chrono::NaiveDate;

use crate::display::format_overview;
use crate::error::{MonexaError, MonexaResult};
use crate::reports::summary::{today, Overview};

use super::Context;

/// First day of the month given as YYYY-MM (or MM.YYYY)
pub(crate) fn parse_month(input: &str) -> MonexaResult<NaiveDate> {
    let input = input.trim();
    let invalid = || {
        MonexaError::Validation(format!("Invalid month: '{}'. Use YYYY-MM", input))
    };

    let (year, month) = if let Some((year, month)) = input.split_once('-') {
        (year, month)
    } else if let Some((month, year)) = input.split_once('.') {
        (year, month)
    } else {
        return Err(invalid());
    };

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
}

/// Print the overview for `month`, or for the current month
pub fn handle_summary_command(ctx: &mut Context, month: Option<&str>) -> MonexaResult<()> {
    let reference = match month {
        Some(month) => parse_month(month)?,
        None => today(),
    };

    let overview = Overview::generate(&ctx.session, reference);
    print!(
        "{}",
        format_overview(&overview, &ctx.settings.default_currency, ctx.settings.locale)
    );
    Ok(())
}
