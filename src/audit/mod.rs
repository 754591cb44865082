//! Audit logging for Monexa
//!
//! Every create, update and delete that goes through the service layer is
//! recorded as one JSON line with the entity's before/after state.
//!
//! - `AuditEntry`: timestamp, operation, entity kind and id, optional states
//!   and a field-level diff for updates.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//! - `generate_diff`: summarizes which top-level fields changed.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
