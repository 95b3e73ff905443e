//! Conversion between epoch days and lunar dates.
//!
//! Both directions count days from lunar new year 1900, which fell on
//! Gregorian 1900-01-31. Epoch days count from 1970-01-01.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use tracing::trace;

use crate::error::LunarError;
use crate::lookup_table::{self, FIRST_YEAR, LAST_YEAR};
use crate::types::LunarDate;

/// Epoch day of 1900-01-31, lunar 1900 month 1 day 1.
pub const LUNAR_EPOCH_DAY: i64 = -25_537;

fn unix_epoch() -> NaiveDate {
    DateTime::<Utc>::UNIX_EPOCH.date_naive()
}

/// Days since 1970-01-01.
pub fn epoch_day(date: NaiveDate) -> i64 {
    (date - unix_epoch()).num_days()
}

/// Gregorian date of an epoch day, or `None` past chrono's date range.
pub fn date_from_epoch_day(epoch_day: i64) -> Option<NaiveDate> {
    let delta = TimeDelta::try_days(epoch_day)?;
    unix_epoch().checked_add_signed(delta)
}

/// Resolves the lunar date of `epoch_day`.
///
/// Fails for days before 1900-01-31 or after the last day of lunar 2099.
pub fn solar_to_lunar(epoch_day: i64) -> Result<LunarDate, LunarError> {
    let Some(mut offset) = epoch_day.checked_sub(LUNAR_EPOCH_DAY) else {
        return Err(LunarError::YearOutOfRange { year: LAST_YEAR + 1 });
    };
    if offset < 0 {
        return Err(LunarError::BeforeEpoch { epoch_day });
    }

    let mut year = FIRST_YEAR;
    loop {
        let length = i64::from(lookup_table::raw_year_length(year));
        if offset < length {
            break;
        }
        offset -= length;
        year += 1;
        if year > LAST_YEAR {
            return Err(LunarError::YearOutOfRange { year });
        }
    }
    trace!(epoch_day, year, day_of_year = offset, "resolved lunar year");

    let leap_month = lookup_table::raw_leap_month(year);
    let mut month = 1;
    let mut in_leap = false;
    loop {
        let length = if in_leap {
            lookup_table::raw_leap_month_length(year).unwrap_or(0)
        } else {
            lookup_table::raw_month_length(year, month)
        };
        let length = i64::from(length);
        if offset < length {
            break;
        }
        offset -= length;
        if !in_leap && leap_month == Some(month) {
            in_leap = true;
        } else {
            in_leap = false;
            month += 1;
        }
    }

    Ok(LunarDate::new_unchecked(year, month, offset as u32 + 1, in_leap))
}

/// Epoch day of a validated lunar date.
pub fn lunar_to_solar(date: &LunarDate) -> i64 {
    let year = date.year();
    let mut offset = i64::from(date.day()) - 1;

    offset += (1..date.month())
        .map(|month| i64::from(lookup_table::raw_month_length(year, month)))
        .sum::<i64>();

    if date.is_leap_month() {
        offset += i64::from(lookup_table::raw_month_length(year, date.month()));
    } else if let Some(leap) = lookup_table::raw_leap_month(year) {
        if leap < date.month() {
            offset += i64::from(lookup_table::raw_leap_month_length(year).unwrap_or(0));
        }
    }

    offset += (FIRST_YEAR..year)
        .map(|y| i64::from(lookup_table::raw_year_length(y)))
        .sum::<i64>();

    offset + LUNAR_EPOCH_DAY
}
