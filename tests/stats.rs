#[cfg(test)]
mod tests {
    use shiftlog::libs::entry::DailyEntry;
    use shiftlog::libs::stats::{sort_by_date, MonthlyStats};

    fn entry(date: &str, hours: f64, kilometers: f64, pickups: u32, deliveries: u32) -> DailyEntry {
        DailyEntry {
            date: date.to_string(),
            hours,
            kilometers,
            pickups,
            deliveries,
            recorded_at: String::new(),
        }
    }

    #[test]
    fn test_sort_orders_by_calendar_date() {
        let mut entries = vec![
            entry("15/03/2025", 8.0, 100.0, 1, 1),
            entry("01/03/2025", 6.0, 80.0, 2, 2),
            entry("20/03/2025", 7.0, 90.0, 3, 3),
        ];
        assert!(sort_by_date(&mut entries));
        let dates: Vec<&str> = entries.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["01/03/2025", "15/03/2025", "20/03/2025"]);
    }

    #[test]
    fn test_sort_falls_back_to_stored_order_on_malformed_date() {
        let mut entries = vec![
            entry("15/03/2025", 8.0, 100.0, 1, 1),
            entry("not-a-date", 6.0, 80.0, 2, 2),
            entry("01/03/2025", 7.0, 90.0, 3, 3),
        ];
        assert!(!sort_by_date(&mut entries));
        let dates: Vec<&str> = entries.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["15/03/2025", "not-a-date", "01/03/2025"]);
    }

    #[test]
    fn test_empty_collection_produces_no_stats() {
        assert!(MonthlyStats::from_entries(&[]).is_none());
    }

    #[test]
    fn test_totals_and_averages() {
        let entries = vec![
            entry("01/03/2025", 8.0, 120.0, 5, 7),
            entry("02/03/2025", 6.0, 80.0, 3, 2),
            entry("03/03/2025", 0.0, 0.0, 0, 0),
        ];
        let stats = MonthlyStats::from_entries(&entries).unwrap();

        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_hours, 14.0);
        assert_eq!(stats.total_kilometers, 200.0);
        assert_eq!(stats.total_pickups, 8);
        assert_eq!(stats.total_deliveries, 9);
        assert_eq!(stats.total_stops(), stats.total_pickups + stats.total_deliveries);

        assert_eq!(stats.avg_hours(), stats.total_hours / 3.0);
        assert_eq!(stats.avg_kilometers(), stats.total_kilometers / 3.0);
        assert_eq!(stats.avg_pickups(), 8.0 / 3.0);
        assert_eq!(stats.avg_deliveries(), 9.0 / 3.0);
        assert_eq!(stats.avg_stops_per_day(), 17.0 / 3.0);
    }

    #[test]
    fn test_single_entry_month() {
        let entries = vec![entry("05/11/2025", 8.0, 120.0, 5, 7)];
        let stats = MonthlyStats::from_entries(&entries).unwrap();

        assert_eq!(stats.total_hours, 8.0);
        assert_eq!(stats.total_kilometers, 120.0);
        assert_eq!(stats.total_stops(), 12);
        assert_eq!(stats.avg_stops_per_day(), 12.0);
    }
}
