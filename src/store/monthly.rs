//! Monthly log file storage.
//!
//! Entries are partitioned into one JSON file per (month, year), named after
//! the entry date (`shiftlog_MM_YYYY.json`). The files are pretty-printed
//! UTF-8 arrays so they stay readable and hand-editable. Loading is lenient:
//! a missing file is an empty month, a corrupt file is reported and treated
//! as empty, and records with missing keys fall back to zeroed fields.
//!
//! Date strings that cannot be parsed map to a single shared fallback file
//! rather than failing, so callers never have to handle a naming error.

use crate::libs::data_dir::DataDir;
use crate::libs::entry::{DailyEntry, DATE_FORMAT};
use crate::libs::messages::Message;
use crate::msg_error;
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use std::fs::{self, File};

/// Shared bucket for entries whose date string could not be parsed.
pub const FALLBACK_FILE_NAME: &str = "shiftlog_fallback.json";

/// Maps a `DD/MM/YYYY` date string to its monthly log file name.
///
/// Malformed dates all land in [`FALLBACK_FILE_NAME`].
pub fn file_name_for(date: &str) -> String {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(parsed) => format!("shiftlog_{:02}_{}.json", parsed.month(), parsed.year()),
        Err(_) => FALLBACK_FILE_NAME.to_string(),
    }
}

/// Owns the persisted monthly collections.
pub struct MonthlyStore {
    data_dir: DataDir,
}

impl MonthlyStore {
    pub fn new() -> Result<Self> {
        let data_dir = DataDir::new();
        data_dir.ensure()?;
        Ok(MonthlyStore { data_dir })
    }

    /// Loads the monthly collection the given date belongs to.
    ///
    /// Never fails from the caller's view: a missing file yields an empty
    /// collection, and an unreadable or corrupt file is reported and yields
    /// an empty collection as well.
    pub fn load(&self, date: &str) -> Vec<DailyEntry> {
        let file_name = file_name_for(date);
        let path = match self.data_dir.resolve(&file_name) {
            Ok(path) => path,
            Err(err) => {
                tracing::error!("Failed to resolve data path for {}: {}", file_name, err);
                msg_error!(Message::LogUnreadable(file_name));
                return Vec::new();
            }
        };
        if !path.exists() {
            return Vec::new();
        }
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!("Failed to read log file {}: {}", file_name, err);
                msg_error!(Message::LogUnreadable(file_name));
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(values) => parse_records(values, &file_name),
            Err(err) => {
                tracing::error!("Failed to parse log file {}: {}", file_name, err);
                msg_error!(Message::LogUnreadable(file_name));
                Vec::new()
            }
        }
    }

    /// Replaces the monthly collection the given date belongs to.
    ///
    /// A write failure is returned for the caller to report; the in-memory
    /// entries the caller holds are untouched either way.
    pub fn save(&self, date: &str, entries: &[DailyEntry]) -> Result<()> {
        let path = self.data_dir.resolve(&file_name_for(date))?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(&file, entries)?;
        Ok(())
    }
}

const RECORD_KEYS: [&str; 5] = ["date", "hours", "kilometers", "pickups", "deliveries"];

/// Converts raw JSON records into entries, warning once per record that is
/// missing a key. Absent fields deserialize to their zero defaults.
fn parse_records(values: Vec<serde_json::Value>, file_name: &str) -> Vec<DailyEntry> {
    let mut entries = Vec::with_capacity(values.len());
    for value in values {
        if let Some(object) = value.as_object() {
            for key in RECORD_KEYS {
                if !object.contains_key(key) {
                    tracing::warn!("Record in {} is missing the '{}' key, defaulting to zero.", file_name, key);
                }
            }
        }
        match serde_json::from_value::<DailyEntry>(value) {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                tracing::warn!("Skipped an unreadable record in {}: {}", file_name, err);
            }
        }
    }
    entries
}
