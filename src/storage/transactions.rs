//! Transaction store
//!
//! Keeps transactions in insertion order. Insertion order matters: it breaks
//! ties when queries sort by date.

use crate::models::{AccountId, Transaction, TransactionId};

/// Ordered in-memory collection of transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction, assigning `max(existing ids) + 1` (or 1)
    pub fn add(&mut self, mut txn: Transaction) -> TransactionId {
        let id = TransactionId::next_after(self.transactions.iter().map(|t| t.id));
        txn.id = id;
        self.transactions.push(txn);
        id
    }

    /// Remove the transaction with `id`, returning it if it was present
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| t.id == id)?;
        Some(self.transactions.remove(index))
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Transactions booked on `account_id` (as source account), in store order
    pub fn by_account(&self, account_id: AccountId) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.account_id == account_id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
