//! Display implementation for shiftlog application messages.
//!
//! All user-facing text lives here, in one place, so wording stays consistent
//! and the rest of the code deals only in typed [`Message`] values.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === MENU MESSAGES ===
            Message::MenuTitle => "Work Shift Log".to_string(),
            Message::MenuPromptChoice => "Enter your choice (0, 1, 2, 3 or 5)".to_string(),
            Message::MenuInvalidChoice => "Invalid choice. Please enter 0, 1, 2, 3 or 5.".to_string(),
            Message::Goodbye => "Closing the program. Take care!".to_string(),
            Message::EditUnderConstruction => "Editing recorded data is still under construction.".to_string(),
            Message::DeleteManualOnly(file_name) => {
                format!("Deleting monthly logs is not implemented. Please delete the file {} manually.", file_name)
            }

            // === DATE PICKER MESSAGES ===
            Message::DatePickerTitle => "Choose a date to record".to_string(),
            Message::PickToday(date) => format!("Record for TODAY ({})", date),
            Message::PickOtherDate => "Record for ANOTHER date (past)".to_string(),
            Message::PickCancel => "Cancel and return to the menu".to_string(),
            Message::PromptOtherDate => "Enter a date (e.g. 01/01/2025)".to_string(),
            Message::DateEntryCancelled => "Entry cancelled.".to_string(),

            // === RECORDING MESSAGES ===
            Message::RecordingFor(date) => format!("Recording for: {}", date),
            Message::PromptHours => "Hours worked (enter 0 for a non-working day)".to_string(),
            Message::HoursNotNumeric => "Hours worked must be a number.".to_string(),
            Message::HoursNegative => "Hours worked cannot be negative.".to_string(),
            Message::NonWorkingDay => "Recorded as a non-working day (all quantities set to zero).".to_string(),
            Message::PromptKilometers => "Kilometers driven".to_string(),
            Message::PromptPickups => "Number of pickups".to_string(),
            Message::PromptDeliveries => "Number of deliveries".to_string(),
            Message::QuantityNotNumeric => "Please enter numbers for kilometers, pickups and deliveries.".to_string(),
            Message::KilometersNegative => "Kilometers driven cannot be negative.".to_string(),
            Message::EntrySaved(file_name) => format!("Entry saved to {}.", file_name),
            Message::SaveFailed => "Could not save the data.".to_string(),

            // === STORE MESSAGES ===
            Message::LogUnreadable(file_name) => {
                format!("Could not read the file {}. Continuing with an empty month.", file_name)
            }

            // === STATISTICS MESSAGES ===
            Message::PromptMonth => "Enter the month number (1-12)".to_string(),
            Message::InvalidMonth => "Invalid month. Please enter a number from 1 to 12.".to_string(),
            Message::PromptYear(year) => format!("Enter the year (leave empty for {})", year),
            Message::InvalidYear => "Invalid year format. Please enter 4 digits (e.g. 2025).".to_string(),
            Message::NoDataForMonth(file_name) => format!("The data file {} is empty or missing.", file_name),
            Message::EntriesSorted => "Entries sorted by date.".to_string(),
            Message::SortFallback => "Could not sort the entries. Showing them as stored.".to_string(),
            Message::StatsHeader(month) => format!("Work log and statistics for {}", month),
            Message::TotalsHeader(count) => format!("Totals ({} entries)", count),
            Message::AveragesHeader => "Averages (per entry)".to_string(),
            Message::EntriesHeader(count) => format!("Recorded days ({})", count),
        };
        write!(f, "{}", text)
    }
}
