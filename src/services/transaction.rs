//! Transaction service
//!
//! Transactions are added and removed, never edited in place.

use chrono::NaiveDateTime;

use crate::audit::EntityType;
use crate::error::{MonexaError, MonexaResult};
use crate::models::{
    AccountId, Money, Transaction, TransactionCategory, TransactionId, TransactionType,
};
use crate::storage::Session;

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub account_id: AccountId,
    pub to_account_id: Option<AccountId>,
    pub date: NaiveDateTime,
    pub amount: Money,
    pub transaction_type: TransactionType,
    pub category: TransactionCategory,
    pub description: String,
    pub notes: Option<String>,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    session: &'a mut Session,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Validate and add a transaction
    pub fn create(&mut self, input: CreateTransactionInput) -> MonexaResult<Transaction> {
        let mut txn = Transaction::with_details(
            input.account_id,
            input.date,
            input.amount,
            input.transaction_type,
            input.category,
            input.description.trim(),
            input
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        );
        txn.to_account_id = input.to_account_id;

        txn.validate()
            .map_err(|e| MonexaError::Validation(e.to_string()))?;

        let id = self.session.transactions.add(txn);
        let txn = self
            .session
            .transactions
            .get(id)
            .cloned()
            .ok_or_else(|| MonexaError::transaction_not_found(id.to_string()))?;

        self.session.log_create(
            EntityType::Transaction,
            id.to_string(),
            Some(txn.description.clone()),
            &txn,
        )?;

        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.session.transactions.get(id)
    }

    /// Find a transaction by ID string ("3", "#3" or "txn-3")
    pub fn find(&self, identifier: &str) -> Option<&Transaction> {
        identifier
            .trim()
            .parse::<TransactionId>()
            .ok()
            .and_then(|id| self.get(id))
    }

    /// Remove transaction `id`; unknown ids yield `Ok(None)`
    pub fn delete(&mut self, id: TransactionId) -> MonexaResult<Option<Transaction>> {
        let Some(removed) = self.session.transactions.remove(id) else {
            return Ok(None);
        };

        self.session.log_delete(
            EntityType::Transaction,
            id.to_string(),
            Some(removed.description.clone()),
            &removed,
        )?;

        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::MonexaPaths;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_session() -> (TempDir, Session) {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonexaPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, Session::with_sample_data().with_audit(&paths))
    }

    fn input(transaction_type: TransactionType, cents: i64) -> CreateTransactionInput {
        CreateTransactionInput {
            account_id: AccountId::new(1),
            to_account_id: None,
            date: NaiveDate::from_ymd_opt(2024, 10, 20)
                .unwrap()
                .and_hms_opt(19, 30, 0)
                .unwrap(),
            amount: Money::from_cents(cents),
            transaction_type,
            category: TransactionCategory::Leisure,
            description: " Kino ".into(),
            notes: Some("  ".into()),
        }
    }

    #[test]
    fn test_create_transaction() {
        let (_temp, mut session) = create_test_session();
        let mut service = TransactionService::new(&mut session);

        let txn = service
            .create(input(TransactionType::Expense, 2400))
            .unwrap();
        assert_eq!(txn.id, TransactionId::new(11));
        assert_eq!(txn.description, "Kino");
        assert!(txn.notes.is_none());

        let log = session.audit().unwrap().read_all().unwrap();
        assert_eq!(log[0].operation, Operation::Create);
        assert_eq!(log[0].entity_name.as_deref(), Some("Kino"));
    }

    #[test]
    fn test_create_rejects_negative_amount() {
        let (_temp, mut session) = create_test_session();
        let mut service = TransactionService::new(&mut session);

        let err = service
            .create(input(TransactionType::Expense, -2400))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.transactions.len(), 10);
    }

    #[test]
    fn test_transfer_needs_distinct_destination() {
        let (_temp, mut session) = create_test_session();
        let mut service = TransactionService::new(&mut session);

        let missing = input(TransactionType::Transfer, 10000);
        assert!(service.create(missing).unwrap_err().is_validation());

        let mut same = input(TransactionType::Transfer, 10000);
        same.to_account_id = Some(AccountId::new(1));
        assert!(service.create(same).unwrap_err().is_validation());

        let mut stray = input(TransactionType::Income, 10000);
        stray.to_account_id = Some(AccountId::new(2));
        assert!(service.create(stray).unwrap_err().is_validation());

        let mut ok = input(TransactionType::Transfer, 10000);
        ok.to_account_id = Some(AccountId::new(3));
        let txn = service.create(ok).unwrap();
        assert_eq!(txn.to_account_id, Some(AccountId::new(3)));
    }

    #[test]
    fn test_find() {
        let (_temp, mut session) = create_test_session();
        let service = TransactionService::new(&mut session);

        assert_eq!(service.find("3").unwrap().description, "REWE Einkauf");
        assert_eq!(service.find("#3").unwrap().description, "REWE Einkauf");
        assert!(service.find("abc").is_none());
        assert!(service.find("99").is_none());
    }

    #[test]
    fn test_delete() {
        let (_temp, mut session) = create_test_session();
        let mut service = TransactionService::new(&mut session);

        let removed = service.delete(TransactionId::new(2)).unwrap().unwrap();
        assert_eq!(removed.description, "Miete");
        assert!(service.delete(TransactionId::new(2)).unwrap().is_none());

        assert_eq!(session.transactions.len(), 9);
        assert_eq!(session.audit().unwrap().read_all().unwrap().len(), 1);
    }
}
