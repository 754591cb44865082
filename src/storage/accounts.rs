//! Account store
//!
//! Keeps accounts in insertion order and hands out ids. Missing ids on
//! update/remove are silently ignored.

use crate::models::{Account, AccountId, Money};

/// Ordered in-memory collection of accounts
#[derive(Debug, Clone, Default)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an account, assigning `max(existing ids) + 1` (or 1)
    ///
    /// Any id already set on `account` is overwritten.
    pub fn add(&mut self, mut account: Account) -> AccountId {
        let id = AccountId::next_after(self.accounts.iter().map(|a| a.id));
        account.id = id;
        self.accounts.push(account);
        id
    }

    /// Overwrite all mutable fields of the account with `id`
    ///
    /// Returns false (and changes nothing) if no such account exists.
    pub fn update(&mut self, id: AccountId, fields: &Account) -> bool {
        match self.accounts.iter_mut().find(|a| a.id == id) {
            Some(existing) => {
                existing.apply(fields);
                true
            }
            None => false,
        }
    }

    /// Remove the account with `id`, returning it if it was present
    pub fn remove(&mut self, id: AccountId) -> Option<Account> {
        let index = self.accounts.iter().position(|a| a.id == id)?;
        Some(self.accounts.remove(index))
    }

    /// Look up an account by id
    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Look up an account by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Option<&Account> {
        let name = name.trim().to_lowercase();
        self.accounts.iter().find(|a| a.name.to_lowercase() == name)
    }

    /// Accounts matching `predicate`, in store order
    pub fn filter<P>(&self, predicate: P) -> Vec<&Account>
    where
        P: Fn(&Account) -> bool,
    {
        self.accounts.iter().filter(|&a| predicate(a)).collect()
    }

    /// Accounts whose name, bank or IBAN contains `text` (case-insensitive)
    ///
    /// Blank text returns every account.
    pub fn search(&self, text: &str) -> Vec<&Account> {
        let text = text.trim();
        if text.is_empty() {
            return self.accounts.iter().collect();
        }
        self.filter(|a| a.matches_search(text))
    }

    /// Sum of balances over active accounts
    pub fn total_active_balance(&self) -> Money {
        self.accounts
            .iter()
            .filter(|a| a.is_active)
            .map(|a| a.balance)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountType;

    fn account(name: &str, cents: i64, active: bool) -> Account {
        let mut account =
            Account::with_balance(name, AccountType::Checking, "Sparkasse", Money::from_cents(cents));
        account.is_active = active;
        account
    }

    #[test]
    fn test_ids_are_max_plus_one() {
        let mut store = AccountStore::new();
        let ids: Vec<_> = (0..4)
            .map(|i| store.add(account(&format!("Konto {}", i), 0, true)))
            .collect();
        assert_eq!(
            ids,
            vec![AccountId::new(1), AccountId::new(2), AccountId::new(3), AccountId::new(4)]
        );

        store.remove(AccountId::new(2));
        assert_eq!(store.add(account("Neu", 0, true)), AccountId::new(5));
    }

    #[test]
    fn test_removing_max_id_frees_it() {
        let mut store = AccountStore::new();
        store.add(account("A", 0, true));
        let last = store.add(account("B", 0, true));
        store.remove(last);

        assert_eq!(store.add(account("C", 0, true)), last);
    }

    #[test]
    fn test_add_overrides_caller_id() {
        let mut store = AccountStore::new();
        let mut preset = account("A", 0, true);
        preset.id = AccountId::new(42);

        assert_eq!(store.add(preset), AccountId::new(1));
        assert!(store.get(AccountId::new(42)).is_none());
    }

    #[test]
    fn test_update_overwrites_fields() {
        let mut store = AccountStore::new();
        let id = store.add(account("Hauptkonto", 543250, true));

        let mut fields = account("Girokonto", 100, false);
        fields.bank_name = "ING".into();
        assert!(store.update(id, &fields));

        let stored = store.get(id).unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.name, "Girokonto");
        assert_eq!(stored.bank_name, "ING");
        assert_eq!(stored.balance.cents(), 100);
        assert!(!stored.is_active);
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut store = AccountStore::new();
        store.add(account("Hauptkonto", 543250, true));
        let before = store.clone();

        assert!(!store.update(AccountId::new(9), &account("X", 1, true)));
        assert_eq!(store.iter().collect::<Vec<_>>(), before.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = AccountStore::new();
        store.add(account("Hauptkonto", 0, true));

        assert!(store.remove(AccountId::new(9)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_total_active_balance() {
        let mut store = AccountStore::new();
        assert_eq!(store.total_active_balance(), Money::zero());

        let giro = store.add(account("Giro", 543250, true));
        store.add(account("Karte", -85630, true));
        assert_eq!(store.total_active_balance().cents(), 457620);

        store.add(account("Alt", 12785, false));
        assert_eq!(store.total_active_balance().cents(), 457620);

        let mut deactivated = store.get(giro).unwrap().clone();
        deactivated.is_active = false;
        store.update(giro, &deactivated);
        assert_eq!(store.total_active_balance().cents(), -85630);
    }

    #[test]
    fn test_search() {
        let mut store = AccountStore::new();
        let mut tagesgeld = account("Tagesgeldkonto", 0, true);
        tagesgeld.bank_name = "ING".into();
        tagesgeld.iban = "DE89 5001 0517".into();
        store.add(account("Hauptkonto", 0, true));
        store.add(tagesgeld);

        assert_eq!(store.search("").len(), 2);
        assert_eq!(store.search("   ").len(), 2);
        assert_eq!(store.search("ing")[0].name, "Tagesgeldkonto");
        assert_eq!(store.search("5001").len(), 1);
        assert_eq!(store.search("SPARKASSE").len(), 1);
        assert!(store.search("deutsche bank").is_empty());
    }

    #[test]
    fn test_filter_keeps_order() {
        let mut store = AccountStore::new();
        store.add(account("C", 1, true));
        store.add(account("A", -1, true));
        store.add(account("B", 2, true));

        let positive: Vec<_> = store
            .filter(|a| a.balance.is_positive())
            .into_iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(positive, vec!["C", "B"]);
    }

    #[test]
    fn test_get_by_name() {
        let mut store = AccountStore::new();
        let id = store.add(account("Kreditkarte Premium", 0, true));

        assert_eq!(store.get_by_name("kreditkarte premium").unwrap().id, id);
        assert!(store.get_by_name("Kreditkarte").is_none());
    }
}
