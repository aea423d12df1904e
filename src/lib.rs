//! Canonical sale-window date resolution for Dutch supermarket weekly promotions.
//!
//! Each chain publishes its weekly discount prices starting on a fixed weekday:
//! most run Monday through Sunday, Jumbo and Dirk run Wednesday through Tuesday.
//! This crate owns the one algorithm that maps a store, a week selector and a
//! reference date to the inclusive 7-day window those prices are valid, plus the
//! record helpers the scraping and recipe pipeline builds on top of it.
//!
//! Scraping, recipe generation and file storage live outside the crate and
//! exchange plain data with it (see [`types`]).

pub mod error;
pub mod resolver;
pub mod schedule;
pub mod tagging;
pub mod types;

pub use error::SaleWindowError;
pub use resolver::{classify_window, resolve};
pub use schedule::{ScheduleLookup, StoreSchedule, StoreScheduleEntry};
pub use types::{Recipe, SaleProduct, SaleWindow, WeekSelector, WindowStatus};
