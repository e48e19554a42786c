use crate::{
    commands::{record, stats},
    libs::{entry::DATE_FORMAT, messages::Message},
    msg_error, msg_print, msg_warning,
    store::monthly::file_name_for,
};
use anyhow::Result;
use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Input};

/// Runs the interactive menu loop.
///
/// Only choice `0` leaves the loop; everything else, including a failing
/// command, reports and re-prompts. Empty input silently re-prompts.
pub fn cmd() -> Result<()> {
    loop {
        print_menu();
        let choice: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::MenuPromptChoice.to_string())
            .allow_empty(true)
            .interact_text()?;
        let trimmed = choice.trim();
        match trimmed.parse::<u32>() {
            Ok(0) => {
                msg_print!(Message::Goodbye, true);
                return Ok(());
            }
            Ok(1) => run(record::cmd()),
            Ok(2) => msg_warning!(Message::EditUnderConstruction, true),
            Ok(3) => run(stats::cmd(stats::StatsArgs::default())),
            Ok(5) => {
                let today = Local::now().date_naive().format(DATE_FORMAT).to_string();
                msg_warning!(Message::DeleteManualOnly(file_name_for(&today)), true);
            }
            _ => {
                if !trimmed.is_empty() {
                    msg_error!(Message::MenuInvalidChoice, true);
                }
            }
        }
    }
}

fn print_menu() {
    msg_print!(Message::MenuTitle, true);
    msg_print!("  1. Record a new entry");
    msg_print!("  2. Edit recorded data");
    msg_print!("  3. View data & statistics");
    msg_print!("  5. Delete a monthly log");
    msg_print!("  0. Exit");
}

/// A command error is reported and the menu keeps running.
fn run(result: Result<()>) {
    if let Err(err) = result {
        tracing::error!("Command failed: {:#}", err);
        msg_error!(err, true);
    }
}
