//! Per-store promotional schedule configuration
//!
//! Each Dutch chain starts its weekly discounts on a fixed weekday: most run
//! Monday through Sunday, Jumbo and Dirk run Wednesday through Tuesday. The
//! table is an explicit value handed to the resolver, never a module-level
//! global, so call sites and tests can override it without cross-file coupling.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::SaleWindowError;

/// One row of schedule config: a store and the weekday its sale week begins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreScheduleEntry {
    pub store_name: String,
    /// 0–6, Monday=0.
    pub week_start_weekday: u8,
}

/// Result of a schedule lookup.
///
/// `known` is false when the store was missing from the table and the Monday
/// default applied, so callers can surface the fallback instead of silently
/// mislabeling dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleLookup {
    pub week_start: Weekday,
    pub known: bool,
}

/// Immutable store → week-start-weekday table.
#[derive(Debug, Clone, Default)]
pub struct StoreSchedule {
    entries: HashMap<String, Weekday>,
}

impl StoreSchedule {
    /// The known schedules of the seven major chains, verified against their
    /// official sale pages.
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        for (store, week_start) in [
            ("Albert Heijn", Weekday::Mon),
            ("Jumbo", Weekday::Wed),
            ("Dirk", Weekday::Wed),
            ("Aldi", Weekday::Mon),
            ("Plus", Weekday::Mon),
            ("Hoogvliet", Weekday::Mon),
            ("Coop", Weekday::Mon),
        ] {
            entries.insert(store.to_string(), week_start);
        }
        Self { entries }
    }

    /// Build a table from config rows, validating weekday indices.
    pub fn from_entries(rows: &[StoreScheduleEntry]) -> Result<Self, SaleWindowError> {
        let mut entries = HashMap::new();
        for row in rows {
            let week_start = weekday_from_index(&row.store_name, i64::from(row.week_start_weekday))?;
            entries.insert(row.store_name.clone(), week_start);
        }
        Ok(Self { entries })
    }

    /// Load a `{"Store Name": weekday}` JSON config file (0–6, Monday=0).
    pub fn from_json_file(path: &Path) -> Result<Self, SaleWindowError> {
        let content = fs::read_to_string(path).map_err(|source| SaleWindowError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: HashMap<String, i64> =
            serde_json::from_str(&content).map_err(|source| SaleWindowError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut entries = HashMap::new();
        for (store, index) in raw {
            let week_start = weekday_from_index(&store, index)?;
            entries.insert(store, week_start);
        }
        log::debug!("Loaded schedule config for {} store(s) from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    /// Add or replace one store's week start. Builder-style, used by tests
    /// and callers with ad-hoc overrides.
    pub fn with_entry(mut self, store_name: &str, week_start: Weekday) -> Self {
        self.entries.insert(store_name.to_string(), week_start);
        self
    }

    /// Look up a store's week-start weekday. Unknown stores fall back to
    /// Monday; the fallback is flagged in the result and logged.
    pub fn lookup(&self, store_name: &str) -> ScheduleLookup {
        match self.entries.get(store_name) {
            Some(&week_start) => ScheduleLookup {
                week_start,
                known: true,
            },
            None => {
                log::warn!(
                    "No schedule entry for store '{}', defaulting week start to Monday",
                    store_name
                );
                ScheduleLookup {
                    week_start: Weekday::Mon,
                    known: false,
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn weekday_from_index(store: &str, index: i64) -> Result<Weekday, SaleWindowError> {
    let week_start = match index {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        6 => Weekday::Sun,
        _ => {
            return Err(SaleWindowError::InvalidWeekday {
                store: store.to_string(),
                weekday: index,
            })
        }
    };
    Ok(week_start)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_builtin_schedule_weekdays() {
        let schedule = StoreSchedule::builtin();
        assert_eq!(schedule.lookup("Albert Heijn").week_start, Weekday::Mon);
        assert_eq!(schedule.lookup("Jumbo").week_start, Weekday::Wed);
        assert_eq!(schedule.lookup("Dirk").week_start, Weekday::Wed);
        assert_eq!(schedule.lookup("Coop").week_start, Weekday::Mon);
        assert_eq!(schedule.len(), 7);
    }

    #[test]
    fn test_unknown_store_flags_monday_default() {
        let schedule = StoreSchedule::builtin();
        let lookup = schedule.lookup("Spar");
        assert_eq!(lookup.week_start, Weekday::Mon);
        assert!(!lookup.known);

        let known = schedule.lookup("Jumbo");
        assert!(known.known);
    }

    #[test]
    fn test_from_entries_rejects_bad_weekday() {
        let rows = vec![StoreScheduleEntry {
            store_name: "Jumbo".to_string(),
            week_start_weekday: 7,
        }];
        let err = StoreSchedule::from_entries(&rows).unwrap_err();
        assert!(matches!(
            err,
            SaleWindowError::InvalidWeekday { ref store, weekday: 7 } if store == "Jumbo"
        ));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Albert Heijn": 0, "Jumbo": 2, "Vomar": 3}}"#).unwrap();

        let schedule = StoreSchedule::from_json_file(file.path()).unwrap();
        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.lookup("Vomar").week_start, Weekday::Thu);
        assert_eq!(schedule.lookup("Jumbo").week_start, Weekday::Wed);
    }

    #[test]
    fn test_from_json_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = StoreSchedule::from_json_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SaleWindowError::ConfigRead { .. }));
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_from_json_file_bad_weekday() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Jumbo": 9}}"#).unwrap();

        let err = StoreSchedule::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, SaleWindowError::InvalidWeekday { weekday: 9, .. }));
    }

    #[test]
    fn test_with_entry_overrides() {
        let schedule = StoreSchedule::builtin().with_entry("Jumbo", Weekday::Fri);
        assert_eq!(schedule.lookup("Jumbo").week_start, Weekday::Fri);
    }
}
