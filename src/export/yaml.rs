//! YAML Export functionality

use serde::Serialize;
use std::io::Write;

use crate::error::{MonexaError, MonexaResult};
use crate::export::json::FullExport;
use crate::storage::Session;

/// Serialize any value as a YAML document
pub fn write_yaml<T, W>(value: &T, writer: &mut W) -> MonexaResult<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    serde_yaml::to_writer(writer, value).map_err(|e| MonexaError::Export(e.to_string()))
}

/// Export the full session to YAML, preceded by a comment header
pub fn export_full_yaml<W: Write>(session: &Session, writer: &mut W) -> MonexaResult<()> {
    let export = FullExport::from_session(session);

    writeln!(writer, "# Monexa export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| MonexaError::Export(e.to_string()))?;

    write_yaml(&export, writer)
}
