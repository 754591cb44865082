//! Dashboard overview formatting

use crate::config::Locale;
use crate::reports::summary::Overview;

use super::{account_type_label, format_money, month_label, pick};

/// Format the overview: balances by account type, then the month's figures
pub fn format_overview(overview: &Overview, currency: &str, locale: Locale) -> String {
    let money = |amount| format_money(amount, currency, locale);
    let mut output = String::new();

    output.push_str(pick(locale, "Übersicht\n", "Overview\n"));
    output.push_str(&"=".repeat(50));
    output.push('\n');

    output.push_str(&format!(
        "{:<32} {:>17}\n",
        pick(locale, "Gesamtsaldo (aktive Konten)", "Total balance (active accounts)"),
        money(overview.total_active_balance)
    ));
    output.push_str(&format!(
        "{:<32} {:>17}\n",
        pick(locale, "Aktive Konten", "Active accounts"),
        overview.active_accounts
    ));
    if overview.inactive_accounts > 0 {
        output.push_str(&format!(
            "{:<32} {:>17}\n",
            pick(locale, "Inaktive Konten", "Inactive accounts"),
            overview.inactive_accounts
        ));
    }

    if !overview.by_type.is_empty() {
        output.push('\n');
        for entry in &overview.by_type {
            output.push_str(&format!(
                "  {:<22} {:>3}  {:>21}\n",
                account_type_label(entry.account_type, locale),
                entry.count,
                money(entry.balance)
            ));
        }
    }

    let month = &overview.month;
    output.push('\n');
    output.push_str(&month_label(month.month, locale));
    output.push('\n');
    output.push_str(&"-".repeat(50));
    output.push('\n');
    output.push_str(&format!(
        "{:<32} {:>17}\n",
        pick(locale, "Einnahmen", "Income"),
        money(month.income)
    ));
    output.push_str(&format!(
        "{:<32} {:>17}\n",
        pick(locale, "Ausgaben", "Expenses"),
        money(month.expenses)
    ));
    output.push_str(&format!(
        "{:<32} {:>17}\n",
        pick(locale, "Saldo", "Net"),
        money(month.net)
    ));
    output.push_str(&format!(
        "{:<32} {:>17}\n",
        pick(locale, "Transaktionen", "Transactions"),
        month.transaction_count
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Session;
    use chrono::NaiveDate;

    #[test]
    fn test_format_overview() {
        let session = Session::with_sample_data();
        let overview = Overview::generate(&session, NaiveDate::from_ymd_opt(2024, 10, 1).unwrap());
        let output = format_overview(&overview, "EUR", Locale::De);

        assert!(output.contains("87.076,95 €"));
        assert!(output.contains("Oktober 2024"));
        assert!(output.contains("4.250,00 €"));
        assert!(output.contains("1.463,64 €"));
        assert!(output.contains("2.786,36 €"));
        assert!(output.contains("Inaktive Konten"));
    }

    #[test]
    fn test_empty_month_in_english() {
        let session = Session::new();
        let overview = Overview::generate(&session, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let output = format_overview(&overview, "EUR", Locale::En);

        assert!(output.contains("January 2025"));
        assert!(output.contains("€0.00"));
        assert!(!output.contains("Inactive accounts"));
    }
}
