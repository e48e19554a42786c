//! Daily shift entry model.
//!
//! A [`DailyEntry`] is one record of a single day's work. Entries are grouped
//! into monthly collections keyed by the entry date, and the date string is
//! the unique key within a month. All numeric fields fall back to zero when
//! a stored record is missing a key, so partially written or hand-edited log
//! files still load.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar date format used everywhere in the application: `DD/MM/YYYY`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Timestamp format for the `recorded_at` audit field.
pub const RECORDED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single day's work record.
///
/// `hours == 0` is the non-working-day sentinel: such an entry always has
/// zero kilometers, pickups and deliveries, enforced by [`DailyEntry::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Calendar date in `DD/MM/YYYY` form, unique within its month.
    #[serde(default)]
    pub date: String,
    /// Hours worked. Zero marks a non-working day.
    #[serde(default)]
    pub hours: f64,
    /// Kilometers driven.
    #[serde(default)]
    pub kilometers: f64,
    /// Number of pickups.
    #[serde(default)]
    pub pickups: u32,
    /// Number of deliveries.
    #[serde(default)]
    pub deliveries: u32,
    /// Creation timestamp, audit only.
    #[serde(default)]
    pub recorded_at: String,
}

impl DailyEntry {
    /// Creates an entry for the given date, stamping `recorded_at` with the
    /// current local time.
    ///
    /// Zero hours short-circuits the remaining quantities: whatever was
    /// supplied for kilometers, pickups and deliveries is replaced by zero.
    pub fn new(date: &str, hours: f64, kilometers: f64, pickups: u32, deliveries: u32) -> Self {
        if hours == 0.0 {
            return Self::non_working(date);
        }
        DailyEntry {
            date: date.to_string(),
            hours,
            kilometers,
            pickups,
            deliveries,
            recorded_at: Local::now().format(RECORDED_AT_FORMAT).to_string(),
        }
    }

    /// Creates a non-working-day entry: zero hours and zero quantities.
    pub fn non_working(date: &str) -> Self {
        DailyEntry {
            date: date.to_string(),
            hours: 0.0,
            kilometers: 0.0,
            pickups: 0,
            deliveries: 0,
            recorded_at: Local::now().format(RECORDED_AT_FORMAT).to_string(),
        }
    }

    /// Parses the entry date, or `None` when the stored string does not
    /// conform to `DD/MM/YYYY`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Pickups plus deliveries for this entry.
    pub fn stops(&self) -> u32 {
        self.pickups + self.deliveries
    }
}
