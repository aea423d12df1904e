//! Canonical sale-window resolution
//!
//! Every pipeline step that needs a promotional date range goes through
//! `resolve`, so one store can never be labeled with two different windows in
//! the same run.

use chrono::{Datelike, Duration, NaiveDate};

use crate::schedule::StoreSchedule;
use crate::types::{SaleWindow, WeekSelector, WindowStatus};

/// Resolve the promotional window for `store_name` relative to `reference_date`.
///
/// `Current` is the store's 7-day cycle containing `reference_date`; `Next` is
/// that window shifted forward one cycle, both ends. Deterministic and pure:
/// the reference date is an explicit parameter, never read from a wall clock,
/// and unknown stores resolve with the Monday default (flagged and logged by
/// the schedule lookup).
pub fn resolve(
    schedule: &StoreSchedule,
    store_name: &str,
    selector: WeekSelector,
    reference_date: NaiveDate,
) -> SaleWindow {
    let lookup = schedule.lookup(store_name);

    let current_monday = reference_date
        - Duration::days(i64::from(reference_date.weekday().num_days_from_monday()));
    let mut start =
        current_monday + Duration::days(i64::from(lookup.week_start.num_days_from_monday()));

    // Walk to the cycle containing the reference date. From the
    // same-calendar-week candidate this is at most one step either way.
    while start + Duration::days(6) < reference_date {
        start += Duration::days(7);
    }
    while start > reference_date {
        start -= Duration::days(7);
    }

    let current = SaleWindow::starting(start);
    match selector {
        WeekSelector::Current => current,
        WeekSelector::Next => current.next_cycle(),
    }
}

/// Classify `window` relative to `reference_date`.
///
/// Both boundary dates count as `Active`: a sale that starts or ends today is
/// still a sale today.
pub fn classify_window(window: SaleWindow, reference_date: NaiveDate) -> WindowStatus {
    if window.start_date > reference_date {
        WindowStatus::Upcoming
    } else if window.end_date < reference_date {
        WindowStatus::Expired
    } else {
        WindowStatus::Active
    }
}
