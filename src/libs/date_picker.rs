//! Date selection and validation for new entries.
//!
//! The picker is a small state machine: the user chooses between today,
//! another (past) date, or cancelling; a chosen candidate is then validated
//! against the format, future and duplicate rules. Every rejection returns
//! to the choice menu, with no retry limit, so the only ways out are an
//! accepted date or an explicit cancellation.

use crate::libs::entry::{DailyEntry, DATE_FORMAT};
use crate::libs::messages::Message;
use crate::msg_error;
use crate::store::monthly::MonthlyStore;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use thiserror::Error;

/// Why a candidate date was refused. These are normal rejection branches
/// shown to the user, not diagnostic errors.
#[derive(Debug, Error, PartialEq)]
pub enum DateRejection {
    #[error("Invalid date format: {0}. Expected DD/MM/YYYY.")]
    BadFormat(String),
    #[error("Cannot record data for a future date ({0}).")]
    Future(String),
    #[error("The date {0} is already recorded. Please pick another date.")]
    Duplicate(String),
}

/// Outcome of the date picker.
#[derive(Debug)]
pub enum DatePick {
    /// Validated date plus the month's already-loaded entries, so the caller
    /// appends without reloading the collection.
    Accepted { date: String, entries: Vec<DailyEntry> },
    /// The user backed out. Not an error.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PickerState {
    AwaitingChoice,
    AwaitingDateInput,
    Validating,
}

/// Checks a candidate date against the format, future and duplicate rules.
///
/// On acceptance returns the date string together with the existing entries
/// of its month.
pub fn validate_candidate(
    candidate: &str,
    today: NaiveDate,
    store: &MonthlyStore,
) -> Result<(String, Vec<DailyEntry>), DateRejection> {
    let parsed = NaiveDate::parse_from_str(candidate, DATE_FORMAT)
        .map_err(|_| DateRejection::BadFormat(candidate.to_string()))?;
    if parsed > today {
        return Err(DateRejection::Future(candidate.to_string()));
    }
    let entries = store.load(candidate);
    if entries.iter().any(|entry| entry.date == candidate) {
        return Err(DateRejection::Duplicate(candidate.to_string()));
    }
    Ok((candidate.to_string(), entries))
}

/// Runs the interactive date selection loop.
pub fn pick(store: &MonthlyStore) -> Result<DatePick> {
    let mut state = PickerState::AwaitingChoice;
    let mut candidate = String::new();
    loop {
        match state {
            PickerState::AwaitingChoice => {
                let today = Local::now().date_naive().format(DATE_FORMAT).to_string();
                let items = [
                    Message::PickToday(today.clone()).to_string(),
                    Message::PickOtherDate.to_string(),
                    Message::PickCancel.to_string(),
                ];
                let selection = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::DatePickerTitle.to_string())
                    .items(&items)
                    .default(0)
                    .interact()?;
                match selection {
                    0 => {
                        candidate = today;
                        state = PickerState::Validating;
                    }
                    1 => state = PickerState::AwaitingDateInput,
                    _ => return Ok(DatePick::Cancelled),
                }
            }
            PickerState::AwaitingDateInput => {
                let input: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptOtherDate.to_string())
                    .allow_empty(true)
                    .interact_text()?;
                candidate = input.trim().to_string();
                state = PickerState::Validating;
            }
            PickerState::Validating => match validate_candidate(&candidate, Local::now().date_naive(), store) {
                Ok((date, entries)) => return Ok(DatePick::Accepted { date, entries }),
                Err(rejection) => {
                    msg_error!(rejection);
                    state = PickerState::AwaitingChoice;
                }
            },
        }
    }
}
