//! Plain-data records exchanged with the scraping and recipe pipeline
//!
//! The scraper, the recipe generator and the JSON file storage all live
//! outside this crate; these types are the interface boundary. Serde attributes
//! keep older field spellings readable and pass unknown recipe fields through
//! untouched.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SaleWindowError;

/// Inclusive 7-day promotional window for one store.
///
/// The end date is always six days after the start; the window never varies
/// in length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl SaleWindow {
    /// Build the window beginning on `start_date`.
    pub fn starting(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date: start_date + Duration::days(6),
        }
    }

    /// Whether `date` falls inside the window. Both boundary dates count.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// The same window one store cycle (7 days) later.
    pub fn next_cycle(&self) -> Self {
        Self {
            start_date: self.start_date + Duration::days(7),
            end_date: self.end_date + Duration::days(7),
        }
    }
}

/// Which promotional week to resolve relative to the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekSelector {
    /// The window containing (or most recently started before) the reference date.
    Current,
    /// The window one store cycle after `Current`.
    Next,
}

impl FromStr for WeekSelector {
    type Err = SaleWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" => Ok(WeekSelector::Current),
            "next" => Ok(WeekSelector::Next),
            _ => Err(SaleWindowError::InvalidSelector(s.to_string())),
        }
    }
}

/// Where a window falls relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowStatus {
    Active,
    Upcoming,
    Expired,
}

/// One discounted product as produced by the scraper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleProduct {
    /// Store display name. Older scraper output spelled this `supermarket`.
    #[serde(alias = "supermarket")]
    pub store: String,
    #[serde(alias = "title")]
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
}

/// The subset of a recipe record this crate reads or writes.
///
/// Recipe files are owned by the generator; everything beyond the store,
/// the menu name and the sale dates passes through `extra` so a
/// read-modify-write cycle never drops fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub store: String,
    pub menu_name: String,
    /// ISO-8601 date (or timestamp, in older files) the sale starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    /// ISO-8601 date (or timestamp, in older files) the sale ends, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
