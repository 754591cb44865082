//! Storage layer for Monexa
//!
//! Accounts and transactions live in memory for the lifetime of a
//! [`Session`]. The session owns both stores and the optional audit logger;
//! every mutation goes through `&mut Session`.

pub mod accounts;
pub mod sample;
pub mod transactions;

pub use accounts::AccountStore;
pub use transactions::TransactionStore;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::MonexaPaths;
use crate::error::MonexaResult;

/// Owner of all in-memory state
#[derive(Debug, Default)]
pub struct Session {
    pub accounts: AccountStore,
    pub transactions: TransactionStore,
    audit: Option<AuditLogger>,
}

impl Session {
    /// Create an empty session without audit logging
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session seeded with the demo accounts and transactions
    pub fn with_sample_data() -> Self {
        Self {
            accounts: sample::sample_accounts(),
            transactions: sample::sample_transactions(),
            audit: None,
        }
    }

    /// Record mutations in the audit log under `paths`
    pub fn with_audit(mut self, paths: &MonexaPaths) -> Self {
        self.audit = Some(AuditLogger::new(paths.audit_log()));
        self
    }

    /// The audit logger, if logging is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> MonexaResult<()> {
        self.write_audit(|| AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> MonexaResult<()> {
        self.write_audit(|| {
            AuditEntry::update(entity_type, entity_id, entity_name, before, after)
        })
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> MonexaResult<()> {
        self.write_audit(|| AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    fn write_audit<F>(&self, build: F) -> MonexaResult<()>
    where
        F: FnOnce() -> AuditEntry,
    {
        match &self.audit {
            Some(logger) => logger.log(&build()),
            None => Ok(()),
        }
    }
}
