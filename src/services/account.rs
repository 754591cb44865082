//! Account service
//!
//! Validates account data before it reaches the store and records every
//! mutation in the audit log.

use crate::audit::EntityType;
use crate::error::{MonexaError, MonexaResult};
use crate::models::{Account, AccountId, Money};
use crate::storage::Session;

/// Service for account management
pub struct AccountService<'a> {
    session: &'a mut Session,
}

fn trimmed(mut account: Account) -> Account {
    account.name = account.name.trim().to_string();
    account.bank_name = account.bank_name.trim().to_string();
    account
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Validate and add an account; the store assigns the id
    pub fn create(&mut self, account: Account) -> MonexaResult<Account> {
        let account = trimmed(account);
        account
            .validate()
            .map_err(|e| MonexaError::Validation(e.to_string()))?;

        let id = self.session.accounts.add(account);
        let account = self
            .session
            .accounts
            .get(id)
            .cloned()
            .ok_or_else(|| MonexaError::account_not_found(id.to_string()))?;

        self.session.log_create(
            EntityType::Account,
            id.to_string(),
            Some(account.name.clone()),
            &account,
        )?;

        Ok(account)
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.session.accounts.get(id)
    }

    /// Find an account by name or ID string
    pub fn find(&self, identifier: &str) -> Option<&Account> {
        if let Some(account) = self.session.accounts.get_by_name(identifier) {
            return Some(account);
        }

        identifier
            .trim()
            .parse::<AccountId>()
            .ok()
            .and_then(|id| self.session.accounts.get(id))
    }

    /// Like [`find`](Self::find), but a miss is an error
    pub fn resolve(&self, identifier: &str) -> MonexaResult<AccountId> {
        self.find(identifier)
            .map(|a| a.id)
            .ok_or_else(|| MonexaError::account_not_found(identifier))
    }

    /// Accounts matching `search` (name, bank or IBAN); all when blank
    pub fn list(&self, search: &str) -> Vec<&Account> {
        self.session.accounts.search(search)
    }

    /// Overwrite all fields of account `id` with `fields`
    ///
    /// Validation runs first. An unknown id changes nothing and yields
    /// `Ok(None)`.
    pub fn update(&mut self, id: AccountId, fields: &Account) -> MonexaResult<Option<Account>> {
        let fields = trimmed(fields.clone());
        fields
            .validate()
            .map_err(|e| MonexaError::Validation(e.to_string()))?;

        let Some(before) = self.session.accounts.get(id).cloned() else {
            return Ok(None);
        };

        self.session.accounts.update(id, &fields);
        let Some(after) = self.session.accounts.get(id).cloned() else {
            return Ok(None);
        };

        self.session.log_update(
            EntityType::Account,
            id.to_string(),
            Some(after.name.clone()),
            &before,
            &after,
        )?;

        Ok(Some(after))
    }

    /// Remove account `id`; unknown ids yield `Ok(None)`
    ///
    /// Transactions referencing the account are kept and resolve to an
    /// unknown account from then on.
    pub fn delete(&mut self, id: AccountId) -> MonexaResult<Option<Account>> {
        let Some(removed) = self.session.accounts.remove(id) else {
            return Ok(None);
        };

        self.session.log_delete(
            EntityType::Account,
            id.to_string(),
            Some(removed.name.clone()),
            &removed,
        )?;

        Ok(Some(removed))
    }

    /// Sum of balances over active accounts
    pub fn total_active_balance(&self) -> Money {
        self.session.accounts.total_active_balance()
    }
}
