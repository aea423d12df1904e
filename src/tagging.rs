//! Recipe and product record helpers built on the resolver
//!
//! These cover the pipeline steps that sit between the scraper output and the
//! published recipe files: stamping sale dates onto recipe records, bucketing
//! a mixed recipe set by week, and grouping scraped products per store before
//! they go to the recipe generator.

use chrono::NaiveDate;

use crate::error::SaleWindowError;
use crate::resolver::{classify_window, resolve};
use crate::schedule::StoreSchedule;
use crate::types::{Recipe, SaleProduct, SaleWindow, WeekSelector, WindowStatus};

/// Fill in missing `valid_from`/`valid_until` on recipe records from their
/// store's resolved window.
///
/// Records that already carry both dates are left untouched, so re-running
/// the stamping step is safe. Returns how many records were stamped.
pub fn stamp_recipe_dates(
    recipes: &mut [Recipe],
    schedule: &StoreSchedule,
    selector: WeekSelector,
    reference_date: NaiveDate,
) -> usize {
    let mut stamped = 0;
    for recipe in recipes.iter_mut() {
        if recipe.valid_from.is_some() && recipe.valid_until.is_some() {
            continue;
        }
        let window = resolve(schedule, &recipe.store, selector, reference_date);
        recipe.valid_from = Some(window.start_date.to_string());
        recipe.valid_until = Some(window.end_date.to_string());
        stamped += 1;
    }
    if stamped > 0 {
        log::info!("Stamped sale dates onto {} recipe record(s)", stamped);
    }
    stamped
}

/// Recipes partitioned by where their sale window falls relative to a
/// reference date.
#[derive(Debug, Default)]
pub struct RecipeBuckets {
    pub current: Vec<Recipe>,
    pub next: Vec<Recipe>,
    pub expired: Vec<Recipe>,
}

/// Partition recipe records into current / next / expired buckets.
///
/// Records with missing or unparseable sale dates are an error, not a silent
/// current-week default; a record that cannot be dated cannot be published
/// under a week label.
pub fn classify_recipes(
    recipes: Vec<Recipe>,
    reference_date: NaiveDate,
) -> Result<RecipeBuckets, SaleWindowError> {
    let mut buckets = RecipeBuckets::default();
    for recipe in recipes {
        let window = recipe_window(&recipe)?;
        match classify_window(window, reference_date) {
            WindowStatus::Active => buckets.current.push(recipe),
            WindowStatus::Upcoming => buckets.next.push(recipe),
            WindowStatus::Expired => buckets.expired.push(recipe),
        }
    }
    log::info!(
        "Classified recipes: {} current, {} next, {} expired",
        buckets.current.len(),
        buckets.next.len(),
        buckets.expired.len()
    );
    Ok(buckets)
}

/// Group scraped products by store, preserving first-seen store order.
pub fn group_by_store(products: Vec<SaleProduct>) -> Vec<(String, Vec<SaleProduct>)> {
    let mut groups: Vec<(String, Vec<SaleProduct>)> = Vec::new();
    for product in products {
        match groups.iter_mut().find(|(store, _)| *store == product.store) {
            Some((_, items)) => items.push(product),
            None => {
                let store = product.store.clone();
                groups.push((store, vec![product]));
            }
        }
    }
    groups
}

/// The sale window stamped on a recipe record.
fn recipe_window(recipe: &Recipe) -> Result<SaleWindow, SaleWindowError> {
    let (from, until) = match (&recipe.valid_from, &recipe.valid_until) {
        (Some(from), Some(until)) => (from, until),
        _ => {
            return Err(SaleWindowError::MissingDates {
                menu_name: recipe.menu_name.clone(),
                store: recipe.store.clone(),
            })
        }
    };
    let start_date = parse_record_date(from).ok_or_else(|| SaleWindowError::InvalidDate {
        menu_name: recipe.menu_name.clone(),
        field: "valid_from",
        value: from.clone(),
    })?;
    let end_date = parse_record_date(until).ok_or_else(|| SaleWindowError::InvalidDate {
        menu_name: recipe.menu_name.clone(),
        field: "valid_until",
        value: until.clone(),
    })?;
    Ok(SaleWindow { start_date, end_date })
}

/// Parse the date part of a record value. Older files carry full ISO
/// timestamps ("2025-01-06T00:00:00", sometimes with a Z suffix); only the
/// calendar date matters.
fn parse_record_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
