#[derive(Debug, Clone)]
pub enum Message {
    // === MENU MESSAGES ===
    MenuTitle,
    MenuPromptChoice,
    MenuInvalidChoice,
    Goodbye,
    EditUnderConstruction,
    DeleteManualOnly(String), // current month's file name

    // === DATE PICKER MESSAGES ===
    DatePickerTitle,
    PickToday(String), // today's date
    PickOtherDate,
    PickCancel,
    PromptOtherDate,
    DateEntryCancelled,

    // === RECORDING MESSAGES ===
    RecordingFor(String), // date
    PromptHours,
    HoursNotNumeric,
    HoursNegative,
    NonWorkingDay,
    PromptKilometers,
    PromptPickups,
    PromptDeliveries,
    QuantityNotNumeric,
    KilometersNegative,
    EntrySaved(String), // file name
    SaveFailed,

    // === STORE MESSAGES ===
    LogUnreadable(String), // file name

    // === STATISTICS MESSAGES ===
    PromptMonth,
    InvalidMonth,
    PromptYear(i32), // default year
    InvalidYear,
    NoDataForMonth(String), // file name
    EntriesSorted,
    SortFallback,
    StatsHeader(String),  // "November 2025"
    TotalsHeader(usize),  // entry count
    AveragesHeader,
    EntriesHeader(usize), // entry count
}
