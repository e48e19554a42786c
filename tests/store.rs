#[cfg(test)]
mod tests {
    use shiftlog::libs::data_dir::DataDir;
    use shiftlog::libs::entry::DailyEntry;
    use shiftlog::store::monthly::{file_name_for, MonthlyStore, FALLBACK_FILE_NAME};
    use std::fs;
    use std::sync::LazyLock;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// One temporary home for the whole test binary; each test works in its
    /// own month so the shared data directory stays conflict-free.
    static TEST_HOME: LazyLock<TempDir> = LazyLock::new(|| {
        let temp_dir = tempfile::tempdir().unwrap();
        std::env::set_var("HOME", temp_dir.path());
        std::env::set_var("LOCALAPPDATA", temp_dir.path());
        temp_dir
    });

    struct StoreTestContext;

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            LazyLock::force(&TEST_HOME);
            StoreTestContext
        }
    }

    #[test]
    fn test_file_name_maps_month_and_year() {
        assert_eq!(file_name_for("05/11/2025"), "shiftlog_11_2025.json");
        assert_eq!(file_name_for("01/01/2024"), "shiftlog_01_2024.json");
    }

    #[test]
    fn test_malformed_dates_share_the_fallback_file() {
        assert_eq!(file_name_for("not-a-date"), FALLBACK_FILE_NAME);
        assert_eq!(file_name_for(""), FALLBACK_FILE_NAME);
        assert_eq!(file_name_for("2025-11-05"), FALLBACK_FILE_NAME);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_load_missing_month_is_empty(_ctx: &mut StoreTestContext) {
        let store = MonthlyStore::new().unwrap();
        assert!(store.load("01/01/2021").is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_round_trip_preserves_entries(_ctx: &mut StoreTestContext) {
        let store = MonthlyStore::new().unwrap();
        let entries = vec![
            DailyEntry::new("03/02/2021", 7.5, 90.0, 4, 6),
            DailyEntry::new("04/02/2021", 8.0, 110.5, 5, 3),
        ];
        store.save("03/02/2021", &entries).unwrap();

        let loaded = store.load("03/02/2021");
        assert_eq!(loaded, entries);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_corrupt_file_is_treated_as_empty(_ctx: &mut StoreTestContext) {
        let path = DataDir::new().resolve("shiftlog_03_2021.json").unwrap();
        fs::write(&path, "{{{ not json").unwrap();

        let store = MonthlyStore::new().unwrap();
        assert!(store.load("10/03/2021").is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_missing_keys_default_to_zero(_ctx: &mut StoreTestContext) {
        let path = DataDir::new().resolve("shiftlog_04_2021.json").unwrap();
        fs::write(&path, r#"[{"date": "12/04/2021"}]"#).unwrap();

        let store = MonthlyStore::new().unwrap();
        let loaded = store.load("12/04/2021");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].date, "12/04/2021");
        assert_eq!(loaded[0].hours, 0.0);
        assert_eq!(loaded[0].kilometers, 0.0);
        assert_eq!(loaded[0].pickups, 0);
        assert_eq!(loaded[0].deliveries, 0);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_fallback_bucket_merges_malformed_dates(_ctx: &mut StoreTestContext) {
        let store = MonthlyStore::new().unwrap();
        let entries = vec![DailyEntry::new("bad-date-a", 1.0, 2.0, 1, 1)];
        store.save("bad-date-a", &entries).unwrap();

        // A different malformed date resolves to the same shared bucket.
        let loaded = store.load("bad-date-b");
        assert_eq!(loaded, entries);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_separates_months(_ctx: &mut StoreTestContext) {
        let store = MonthlyStore::new().unwrap();
        store.save("15/05/2021", &[DailyEntry::new("15/05/2021", 5.0, 40.0, 2, 2)]).unwrap();
        store.save("15/06/2021", &[DailyEntry::new("15/06/2021", 6.0, 50.0, 3, 3)]).unwrap();

        assert_eq!(store.load("01/05/2021").len(), 1);
        assert_eq!(store.load("01/06/2021").len(), 1);
        assert_eq!(store.load("01/05/2021")[0].date, "15/05/2021");
        assert_eq!(store.load("01/06/2021")[0].date, "15/06/2021");
    }
}
