//! Approximate Gregorian dates of the 24 solar terms.
//!
//! Term instants follow a fixed linear model: a reference instant in 1900,
//! plus a whole number of mean tropical years, plus the term's minute offset.
//! The model is only meaningful for 1900..=2100, and the sexagenary month
//! and year boundaries are calibrated against it, so it must not be replaced
//! by a more accurate ephemeris.

use chrono::{DateTime, Datelike, TimeDelta, Utc};

use crate::lookup_table;
use crate::names;

/// Mean tropical year in milliseconds, truncated to an integer.
pub const MEAN_TROPICAL_YEAR_MILLIS: i64 = 31_556_925_974;

/// 1900-01-06T02:05:00Z (小寒 1900) in Unix milliseconds.
pub const REFERENCE_INSTANT_MILLIS: i64 = -2_208_549_300_000;

pub const TERM_COUNT: usize = 24;

/// Instant of term `term_index` (0 = 小寒) in Gregorian `year`.
///
/// # Panics
///
/// Panics if `term_index >= 24`.
pub fn solar_term_instant(year: i32, term_index: usize) -> DateTime<Utc> {
    assert!(term_index < TERM_COUNT, "solar term index {term_index} out of range");
    let millis = MEAN_TROPICAL_YEAR_MILLIS * i64::from(year - 1900)
        + lookup_table::solar_term_offset_minutes(term_index) * 60_000
        + REFERENCE_INSTANT_MILLIS;
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::milliseconds(millis)
}

/// UTC `(month, day)` of term `term_index` in `year`, month 1-based.
pub fn solar_term_date(year: i32, term_index: usize) -> (u32, u32) {
    let instant = solar_term_instant(year, term_index);
    (instant.month(), instant.day())
}

/// Day of month on which term `term_index` falls in `year`.
pub fn solar_term_day(year: i32, term_index: usize) -> u32 {
    solar_term_instant(year, term_index).day()
}

/// The pair of terms falling in Gregorian `month` (1-based): the node
/// (节) first, then the midpoint (气).
pub fn terms_in_month(month: u32) -> [usize; 2] {
    let first = (month as usize - 1) * 2;
    [first, first + 1]
}

/// # Panics
///
/// Panics if `term_index >= 24`.
pub fn term_name(term_index: usize) -> &'static str {
    names::SOLAR_TERMS[term_index]
}
