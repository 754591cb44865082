//! Configuration module for Monexa
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::MonexaPaths;
pub use settings::{Locale, Settings};
