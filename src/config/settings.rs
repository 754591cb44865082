//! User settings for Monexa
//!
//! Manages display preferences (locale, currency, date format) and whether
//! mutations are written to the audit log.

use std::fmt::{self, Write};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::MonexaPaths;
use crate::error::MonexaError;

/// Display locale for month names and number formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// German: "1.234,56 €", "Oktober 2024"
    #[default]
    De,
    /// English: "€1,234.56", "October 2024"
    En,
}

impl Locale {
    /// Parse a locale from a string such as "de", "de-DE" or "en_US"
    pub fn parse(s: &str) -> Option<Self> {
        let lang = s
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match lang.as_str() {
            "de" => Some(Self::De),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::De => write!(f, "de"),
            Self::En => write!(f, "en"),
        }
    }
}

/// User settings for Monexa
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency assigned to new accounts
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Locale used for month names and amounts
    #[serde(default)]
    pub locale: Locale,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether create/update/delete operations are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_date_format() -> String {
    "%d.%m.%Y".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

/// Render a sample date with `format`, failing on specifiers chrono cannot
/// produce for a date without a time zone
pub fn check_date_format(format: &str) -> Result<(), MonexaError> {
    let sample = NaiveDate::from_ymd_opt(2024, 10, 15)
        .and_then(|d| d.and_hms_opt(8, 30, 0))
        .unwrap_or_default();
    let mut rendered = String::new();
    write!(rendered, "{}", sample.format(format))
        .map_err(|_| MonexaError::Config(format!("Invalid date format: '{}'", format)))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: default_currency(),
            locale: Locale::default(),
            date_format: default_date_format(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &MonexaPaths) -> Result<Self, MonexaError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| MonexaError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| MonexaError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<(), MonexaError> {
        check_date_format(&self.date_format)?;
        if self.default_currency.trim().is_empty() {
            return Err(MonexaError::Config("Default currency must not be empty".into()));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MonexaPaths) -> Result<(), MonexaError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| MonexaError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| MonexaError::Io(format!("Failed to write settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_currency, "EUR");
        assert_eq!(settings.locale, Locale::De);
        assert_eq!(settings.date_format, "%d.%m.%Y");
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonexaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.locale, Locale::De);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonexaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.locale = Locale::En;
        settings.audit_enabled = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.locale, Locale::En);
        assert!(!loaded.audit_enabled);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonexaPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"locale": "en"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.locale, Locale::En);
        assert_eq!(loaded.default_currency, "EUR");
        assert!(loaded.audit_enabled);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonexaPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, MonexaError::Config(_)));
    }

    #[test]
    fn test_unrenderable_date_format_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonexaPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%d.%m.%Y %Z"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, MonexaError::Config(_)));
        assert!(err.to_string().contains("%Z"));
    }

    #[test]
    fn test_check_date_format() {
        assert!(check_date_format("%d.%m.%Y").is_ok());
        assert!(check_date_format("%Y-%m-%d %H:%M").is_ok());
        assert!(check_date_format("%Z").is_err());
        assert!(check_date_format("%Q").is_err());
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!(Locale::parse("de-DE"), Some(Locale::De));
        assert_eq!(Locale::parse("en_US"), Some(Locale::En));
        assert_eq!(Locale::parse("EN"), Some(Locale::En));
        assert_eq!(Locale::parse("fr"), None);
    }
}
