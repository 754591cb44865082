//! Path management for Monexa
//!
//! Resolves where configuration and the audit log live.
//!
//! ## Path Resolution Order
//!
//! 1. `MONEXA_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/monexa` or `~/.config/monexa`
//! 3. Windows: `%APPDATA%\monexa`

use std::path::PathBuf;

use crate::error::MonexaError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "MONEXA_DATA_DIR";

/// Manages all paths used by Monexa
#[derive(Debug, Clone)]
pub struct MonexaPaths {
    base_dir: PathBuf,
}

impl MonexaPaths {
    /// Create a new MonexaPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, MonexaError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create MonexaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), MonexaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MonexaError::Io(format!("Failed to create base directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, MonexaError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("monexa"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| MonexaError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("monexa"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, MonexaError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| MonexaError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("monexa"))
}
