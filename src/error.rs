//! Error types for the lunar_almanac crate.

/// Error type for every fallible date resolution in the crate.
///
/// All validation happens when a date is resolved; once an
/// [`Almanac`](crate::Almanac) exists, its annotations cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LunarError {
    /// Returned when a solar or lunar year falls outside 1900..=2099.
    #[error("year {year} is outside the supported range 1900..=2099")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
    },

    /// Returned when a solar day precedes lunar new year 1900 (1900-01-31).
    #[error("epoch day {epoch_day} precedes the first supported lunar day")]
    BeforeEpoch {
        /// Days since 1970-01-01 of the rejected date.
        epoch_day: i64,
    },

    /// Returned when a Gregorian triple does not name a real day.
    #[error("invalid solar date: {year:04}-{month:02}-{day:02}")]
    InvalidSolarDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },

    /// Returned when a lunar month number is outside 1..=12.
    #[error("invalid lunar month: {month} (must be 1..=12)")]
    InvalidLunarMonth {
        /// The rejected month number.
        month: u32,
    },

    /// Returned when a lunar day exceeds the length of its month.
    #[error("invalid lunar day: {day} for {year} month {month} (max {max_day})")]
    InvalidLunarDay {
        /// Lunar year.
        year: i32,
        /// Lunar month number.
        month: u32,
        /// The rejected day.
        day: u32,
        /// Length of that month.
        max_day: u32,
    },

    /// Returned when a leap month is requested that the year does not have.
    #[error("lunar year {year} has no leap month {month}")]
    NoLeapMonth {
        /// Lunar year.
        year: i32,
        /// The requested leap month number.
        month: u32,
    },

    /// Returned when a millisecond timestamp cannot be represented.
    #[error("timestamp {millis} ms is not representable")]
    TimestampOutOfRange {
        /// The rejected timestamp.
        millis: i64,
    },

    /// Returned when a configured UTC offset is a whole day or more.
    #[error("invalid UTC offset: {minutes} minutes")]
    InvalidUtcOffset {
        /// The rejected offset.
        minutes: i32,
    },
}
