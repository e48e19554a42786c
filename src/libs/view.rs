use crate::libs::entry::DailyEntry;
use crate::libs::stats::MonthlyStats;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Detail table: one row per recorded day, in display order.
    pub fn entries(entries: &[DailyEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "HOURS", "KILOMETERS", "PICKUPS", "DELIVERIES"]);
        for entry in entries {
            let date = if entry.date.is_empty() { "N/A" } else { entry.date.as_str() };
            table.add_row(row![
                date,
                format!("{:.1}", entry.hours),
                format!("{:.1}", entry.kilometers),
                entry.pickups,
                entry.deliveries
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Monthly totals block.
    pub fn totals(stats: &MonthlyStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Total hours worked", format!("{:.1} h", stats.total_hours)]);
        table.add_row(row!["Total kilometers", format!("{:.1} km", stats.total_kilometers)]);
        table.add_row(row!["Total pickups", stats.total_pickups]);
        table.add_row(row!["Total deliveries", stats.total_deliveries]);
        table.add_row(row!["Total stops", stats.total_stops()]);
        table.printstd();

        Ok(())
    }

    /// Per-entry averages block.
    pub fn averages(stats: &MonthlyStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Average hours", format!("{:.2} h", stats.avg_hours())]);
        table.add_row(row!["Average kilometers", format!("{:.2} km", stats.avg_kilometers())]);
        table.add_row(row!["Average pickups", format!("{:.2}", stats.avg_pickups())]);
        table.add_row(row!["Average deliveries", format!("{:.2}", stats.avg_deliveries())]);
        table.add_row(row!["Average stops per day", format!("{:.2}", stats.avg_stops_per_day())]);
        table.printstd();

        Ok(())
    }
}
