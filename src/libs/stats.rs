//! Monthly aggregate statistics.

use crate::libs::entry::DailyEntry;
use chrono::NaiveDate;

/// Totals over one month's entries. Built only from a non-empty collection,
/// so the per-entry averages never divide by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyStats {
    pub count: usize,
    pub total_hours: f64,
    pub total_kilometers: f64,
    pub total_pickups: u64,
    pub total_deliveries: u64,
}

impl MonthlyStats {
    /// Sums the collection, or `None` when it is empty (the "no data" case).
    pub fn from_entries(entries: &[DailyEntry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        let mut stats = MonthlyStats {
            count: entries.len(),
            total_hours: 0.0,
            total_kilometers: 0.0,
            total_pickups: 0,
            total_deliveries: 0,
        };
        for entry in entries {
            stats.total_hours += entry.hours;
            stats.total_kilometers += entry.kilometers;
            stats.total_pickups += u64::from(entry.pickups);
            stats.total_deliveries += u64::from(entry.deliveries);
        }
        Some(stats)
    }

    pub fn total_stops(&self) -> u64 {
        self.total_pickups + self.total_deliveries
    }

    pub fn avg_hours(&self) -> f64 {
        self.total_hours / self.count as f64
    }

    pub fn avg_kilometers(&self) -> f64 {
        self.total_kilometers / self.count as f64
    }

    pub fn avg_pickups(&self) -> f64 {
        self.total_pickups as f64 / self.count as f64
    }

    pub fn avg_deliveries(&self) -> f64 {
        self.total_deliveries as f64 / self.count as f64
    }

    pub fn avg_stops_per_day(&self) -> f64 {
        self.total_stops() as f64 / self.count as f64
    }
}

/// Sorts entries ascending by calendar date.
///
/// Returns `false` without touching the order when any entry carries a date
/// that does not parse; the caller reports the failure and displays the
/// entries as stored.
pub fn sort_by_date(entries: &mut Vec<DailyEntry>) -> bool {
    let mut keys: Vec<NaiveDate> = Vec::with_capacity(entries.len());
    for entry in entries.iter() {
        match entry.parsed_date() {
            Some(date) => keys.push(date),
            None => {
                tracing::error!("Failed to sort entries: unparsable date '{}'.", entry.date);
                return false;
            }
        }
    }
    let mut pairs: Vec<(NaiveDate, DailyEntry)> = keys.into_iter().zip(entries.drain(..)).collect();
    pairs.sort_by_key(|(date, _)| *date);
    entries.extend(pairs.into_iter().map(|(_, entry)| entry));
    true
}
