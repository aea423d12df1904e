//! Error types for sale-window resolution
//!
//! Errors are classified by where untyped data enters the crate:
//! - Invalid input: weekday integers outside 0–6, unrecognized week selectors,
//!   missing or unparseable sale dates on recipe records
//! - Config: unreadable or malformed schedule config files

use std::path::PathBuf;
use thiserror::Error;

/// Error types for schedule config loading and record tagging.
#[derive(Debug, Error)]
pub enum SaleWindowError {
    // Invalid input errors
    #[error("Invalid week-start weekday {weekday} for store '{store}' (expected 0-6, Monday=0)")]
    InvalidWeekday { store: String, weekday: i64 },

    #[error("Invalid week selector '{0}' (expected 'current' or 'next')")]
    InvalidSelector(String),

    #[error("Invalid {field} date '{value}' on recipe '{menu_name}'")]
    InvalidDate {
        menu_name: String,
        field: &'static str,
        value: String,
    },

    #[error("Recipe '{menu_name}' from {store} has no sale dates")]
    MissingDates { menu_name: String, store: String },

    // Config errors
    #[error("Failed to read schedule config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse schedule config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SaleWindowError {
    /// Returns true if this error comes from invalid caller-supplied data
    /// rather than the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SaleWindowError::InvalidWeekday { .. }
                | SaleWindowError::InvalidSelector(_)
                | SaleWindowError::InvalidDate { .. }
                | SaleWindowError::MissingDates { .. }
        )
    }
}
