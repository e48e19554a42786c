use crate::{
    libs::{
        date_picker::{self, DatePick},
        entry::DailyEntry,
        messages::Message,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
    store::monthly::{file_name_for, MonthlyStore},
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

/// Records one daily entry: pick a date, collect the quantities, append to
/// the month's collection and save it.
pub fn cmd() -> Result<()> {
    let store = MonthlyStore::new()?;

    let (date, mut entries) = match date_picker::pick(&store)? {
        DatePick::Accepted { date, entries } => (date, entries),
        DatePick::Cancelled => {
            msg_info!(Message::DateEntryCancelled);
            return Ok(());
        }
    };
    msg_print!(Message::RecordingFor(date.clone()));

    let hours = prompt_hours()?;
    let entry = if hours == 0.0 {
        // Zero hours is the sanctioned one-input way to log a non-working
        // day: the remaining quantities are not even prompted for.
        msg_warning!(Message::NonWorkingDay);
        DailyEntry::non_working(&date)
    } else {
        match prompt_quantities()? {
            Some((kilometers, pickups, deliveries)) => DailyEntry::new(&date, hours, kilometers, pickups, deliveries),
            // Invalid quantity input aborts the whole entry; nothing is saved.
            None => return Ok(()),
        }
    };

    entries.push(entry);
    if let Err(err) = store.save(&date, &entries) {
        tracing::error!("Failed to save entries for {}: {}", date, err);
        msg_error!(Message::SaveFailed);
        return Ok(());
    }

    msg_success!(Message::EntrySaved(file_name_for(&date)), true);
    Ok(())
}

/// Prompts for hours worked until a non-negative number is entered.
fn prompt_hours() -> Result<f64> {
    loop {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHours.to_string())
            .allow_empty(true)
            .interact_text()?;
        match input.trim().parse::<f64>() {
            Ok(hours) if hours < 0.0 => msg_error!(Message::HoursNegative),
            Ok(hours) => return Ok(hours),
            Err(_) => msg_error!(Message::HoursNotNumeric),
        }
    }
}

/// Prompts for kilometers, pickups and deliveries.
///
/// Unlike the hours prompt, each value is parsed exactly once: any invalid
/// input abandons the entry and returns `None`, reported as a recoverable
/// condition.
fn prompt_quantities() -> Result<Option<(f64, u32, u32)>> {
    let kilometers = match prompt_raw(Message::PromptKilometers)?.parse::<f64>() {
        Ok(kilometers) if kilometers < 0.0 => {
            tracing::warn!("Entry aborted: negative kilometers value.");
            msg_error!(Message::KilometersNegative);
            return Ok(None);
        }
        Ok(kilometers) => kilometers,
        Err(_) => return Ok(abort_on_bad_quantity()),
    };
    let pickups = match prompt_raw(Message::PromptPickups)?.parse::<u32>() {
        Ok(pickups) => pickups,
        Err(_) => return Ok(abort_on_bad_quantity()),
    };
    let deliveries = match prompt_raw(Message::PromptDeliveries)?.parse::<u32>() {
        Ok(deliveries) => deliveries,
        Err(_) => return Ok(abort_on_bad_quantity()),
    };
    Ok(Some((kilometers, pickups, deliveries)))
}

fn prompt_raw(prompt: Message) -> Result<String> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

fn abort_on_bad_quantity() -> Option<(f64, u32, u32)> {
    tracing::warn!("Entry aborted: invalid numeric value for kilometers, pickups or deliveries.");
    msg_error!(Message::QuantityNotNumeric, true);
    None
}
