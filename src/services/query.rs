//! Transaction queries
//!
//! Filtering, date ordering and month grouping over the stores. Everything
//! here is read-only and returns borrowed records.

use chrono::Datelike;
use std::fmt;

use crate::models::{Account, AccountId, Transaction, TransactionCategory, TransactionType};
use crate::storage::{AccountStore, TransactionStore};

/// Display name used for account ids that no longer resolve
pub const UNKNOWN_ACCOUNT: &str = "Unknown";

/// Filter criteria for transaction lists
///
/// Every criterion is optional; the ones that are set combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Case-insensitive text searched in description and notes
    pub search_text: Option<String>,
    /// Filter by account
    pub account_id: Option<AccountId>,
    /// Filter by category
    pub category: Option<TransactionCategory>,
    /// Filter by income/expense/transfer
    pub transaction_type: Option<TransactionType>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by search text; blank text disables the criterion
    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search_text = if text.trim().is_empty() {
            None
        } else {
            Some(text.trim().to_string())
        };
        self
    }

    /// Filter by account
    pub fn account(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Filter by category
    pub fn category(mut self, category: TransactionCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by transaction type
    pub fn transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    /// Reset every criterion
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `txn` satisfies every active criterion
    pub fn matches(&self, txn: &Transaction) -> bool {
        let text_ok = match self.search_text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => txn.matches_search(text),
            _ => true,
        };

        text_ok
            && self.account_id.map_or(true, |id| txn.account_id == id)
            && self.category.map_or(true, |c| txn.category == c)
            && self
                .transaction_type
                .map_or(true, |t| txn.transaction_type == t)
    }
}

/// Transactions matching `filter`, newest first
///
/// Transactions sharing a date keep their store order.
pub fn filter_transactions<'s>(
    store: &'s TransactionStore,
    filter: &TransactionFilter,
) -> Vec<&'s Transaction> {
    let mut result: Vec<&Transaction> = store.iter().filter(|t| filter.matches(t)).collect();
    // sort_by is stable
    result.sort_by(|a, b| b.date.cmp(&a.date));
    result
}

/// Calendar month used to group transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month `date` falls in
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self::new(date.year(), date.month())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Transactions of one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup<'s> {
    pub key: MonthKey,
    pub transactions: Vec<&'s Transaction>,
}

/// Group `transactions` by calendar month
///
/// Groups appear in order of first appearance and keep the input order
/// inside each group.
pub fn group_by_month<'s>(transactions: &[&'s Transaction]) -> Vec<MonthGroup<'s>> {
    let mut groups: Vec<MonthGroup<'s>> = Vec::new();

    for &txn in transactions {
        let key = MonthKey::of(&txn.date);
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.transactions.push(txn),
            None => groups.push(MonthGroup {
                key,
                transactions: vec![txn],
            }),
        }
    }

    groups
}

/// Accounts whose name, bank or IBAN contains `search_text`
pub fn filter_accounts<'s>(store: &'s AccountStore, search_text: &str) -> Vec<&'s Account> {
    store.search(search_text)
}

/// Name of account `id`, or [`UNKNOWN_ACCOUNT`] if it does not exist
pub fn account_name(store: &AccountStore, id: AccountId) -> &str {
    store
        .get(id)
        .map(|a| a.name.as_str())
        .unwrap_or(UNKNOWN_ACCOUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::sample::{sample_accounts, sample_transactions};
    use chrono::NaiveDate;

    fn ids(transactions: &[&Transaction]) -> Vec<u32> {
        transactions.iter().map(|t| t.id.get()).collect()
    }

    fn on(store: &mut TransactionStore, y: i32, m: u32, d: u32, description: &str) {
        let mut txn = Transaction::new(
            AccountId::new(1),
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            Money::from_cents(100),
            TransactionType::Expense,
            TransactionCategory::Shopping,
        );
        txn.description = description.into();
        store.add(txn);
    }

    #[test]
    fn test_no_criteria_returns_all_newest_first() {
        let store = sample_transactions();
        let result = filter_transactions(&store, &TransactionFilter::new());

        assert_eq!(ids(&result), vec![10, 9, 8, 7, 6, 5, 3, 4, 2, 1]);
    }

    #[test]
    fn test_equal_dates_keep_store_order() {
        let mut store = TransactionStore::new();
        on(&mut store, 2024, 10, 5, "first");
        on(&mut store, 2024, 10, 1, "older");
        on(&mut store, 2024, 10, 5, "second");
        on(&mut store, 2024, 10, 5, "third");

        let result = filter_transactions(&store, &TransactionFilter::new());
        assert_eq!(ids(&result), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_search_text() {
        let store = sample_transactions();

        let rewe = filter_transactions(&store, &TransactionFilter::new().search("rewe"));
        assert_eq!(ids(&rewe), vec![3]);

        // matches notes too
        let monatlich = filter_transactions(&store, &TransactionFilter::new().search("MONATLICH"));
        assert_eq!(ids(&monatlich), vec![4, 1]);

        let blank = filter_transactions(&store, &TransactionFilter::new().search("   "));
        assert_eq!(blank.len(), 10);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let store = sample_transactions();
        let filter = TransactionFilter::new()
            .account(AccountId::new(4))
            .transaction_type(TransactionType::Expense);

        let result = filter_transactions(&store, &filter);
        assert_eq!(ids(&result), vec![9, 7, 6]);
        assert!(result
            .iter()
            .all(|t| t.account_id == AccountId::new(4) && t.is_expense()));

        let none = filter_transactions(
            &store,
            &filter.clone().category(TransactionCategory::Salary),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_category_filter() {
        let store = sample_transactions();
        let filter = TransactionFilter::new().category(TransactionCategory::Savings);
        assert_eq!(ids(&filter_transactions(&store, &filter)), vec![5]);
    }

    #[test]
    fn test_clear() {
        let mut filter = TransactionFilter::new()
            .search("miete")
            .account(AccountId::new(1))
            .category(TransactionCategory::Housing)
            .transaction_type(TransactionType::Expense);
        assert!(!filter.is_empty());

        filter.clear();
        assert!(filter.is_empty());
        assert_eq!(filter_transactions(&sample_transactions(), &filter).len(), 10);
    }

    #[test]
    fn test_group_by_month() {
        let mut store = TransactionStore::new();
        on(&mut store, 2024, 9, 30, "sep");
        on(&mut store, 2024, 10, 2, "oct a");
        on(&mut store, 2023, 10, 15, "last year");
        on(&mut store, 2024, 10, 20, "oct b");

        let sorted = filter_transactions(&store, &TransactionFilter::new());
        let groups = group_by_month(&sorted);

        let keys: Vec<_> = groups.iter().map(|g| g.key).collect();
        assert_eq!(
            keys,
            vec![
                MonthKey::new(2024, 10),
                MonthKey::new(2024, 9),
                MonthKey::new(2023, 10)
            ]
        );
        assert_eq!(ids(&groups[0].transactions), vec![4, 2]);
    }

    #[test]
    fn test_group_keeps_first_appearance_order() {
        let mut store = TransactionStore::new();
        on(&mut store, 2024, 1, 1, "jan");
        on(&mut store, 2024, 3, 1, "mar");
        on(&mut store, 2024, 1, 9, "jan again");

        let unsorted: Vec<_> = store.iter().collect();
        let groups = group_by_month(&unsorted);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, MonthKey::new(2024, 1));
        assert_eq!(ids(&groups[0].transactions), vec![1, 3]);
        assert!(group_by_month(&[]).is_empty());
    }

    #[test]
    fn test_month_key_display() {
        assert_eq!(MonthKey::new(2024, 3).to_string(), "2024-03");
    }

    #[test]
    fn test_account_name_falls_back() {
        let accounts = sample_accounts();
        assert_eq!(account_name(&accounts, AccountId::new(4)), "Kreditkarte Premium");
        assert_eq!(account_name(&accounts, AccountId::new(40)), UNKNOWN_ACCOUNT);
    }

    #[test]
    fn test_filter_accounts() {
        let accounts = sample_accounts();
        assert_eq!(filter_accounts(&accounts, "sparkasse").len(), 3);
        assert_eq!(filter_accounts(&accounts, "").len(), 6);
    }
}
