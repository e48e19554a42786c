use crate::{
    libs::{
        messages::Message,
        stats::{sort_by_date, MonthlyStats},
        view::View,
    },
    msg_error, msg_print, msg_success, msg_warning,
    store::monthly::{file_name_for, MonthlyStore},
};
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Default, Args)]
pub struct StatsArgs {
    #[arg(long, short, help = "Month number (1-12)")]
    month: Option<u32>,
    #[arg(long, short, help = "Year (defaults to the current year)")]
    year: Option<i32>,
}

/// Shows the monthly report: totals, per-entry averages and the detail table.
pub fn cmd(args: StatsArgs) -> Result<()> {
    let store = MonthlyStore::new()?;
    let (month, year) = resolve_month_year(&args)?;

    // The day is fixed to the 1st; the date only selects the monthly file.
    let date = format!("01/{:02}/{}", month, year);
    let file_name = file_name_for(&date);

    let mut entries = store.load(&date);
    if entries.is_empty() {
        msg_error!(Message::NoDataForMonth(file_name));
        return Ok(());
    }

    if sort_by_date(&mut entries) {
        msg_success!(Message::EntriesSorted);
    } else {
        msg_warning!(Message::SortFallback);
    }

    msg_print!(Message::StatsHeader(month_label(month, year)), true);
    if let Some(stats) = MonthlyStats::from_entries(&entries) {
        msg_print!(Message::TotalsHeader(stats.count));
        View::totals(&stats)?;
        msg_print!(Message::AveragesHeader);
        View::averages(&stats)?;
    }
    msg_print!(Message::EntriesHeader(entries.len()));
    View::entries(&entries)?;

    Ok(())
}

fn month_label(month: u32, year: i32) -> String {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date.format("%B %Y").to_string(),
        None => format!("{:02}/{}", month, year),
    }
}

/// Month and year from the arguments, prompting for whatever is missing.
fn resolve_month_year(args: &StatsArgs) -> Result<(u32, i32)> {
    let month = match args.month {
        Some(month) if (1..=12).contains(&month) => month,
        Some(_) => {
            msg_error!(Message::InvalidMonth);
            prompt_month()?
        }
        None => prompt_month()?,
    };
    let year = match args.year {
        Some(year) => year,
        None => prompt_year()?,
    };
    Ok((month, year))
}

/// Prompts until a month between 1 and 12 is entered.
fn prompt_month() -> Result<u32> {
    loop {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMonth.to_string())
            .allow_empty(true)
            .interact_text()?;
        match input.trim().parse::<u32>() {
            Ok(month) if (1..=12).contains(&month) => return Ok(month),
            _ => msg_error!(Message::InvalidMonth),
        }
    }
}

/// Prompts for a 4-digit year; empty input selects the current year.
fn prompt_year() -> Result<i32> {
    let current_year = Local::now().year();
    loop {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptYear(current_year).to_string())
            .allow_empty(true)
            .interact_text()?;
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(current_year);
        }
        if trimmed.len() == 4 && trimmed.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(year) = trimmed.parse::<i32>() {
                return Ok(year);
            }
        }
        msg_error!(Message::InvalidYear);
    }
}
