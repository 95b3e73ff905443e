use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::LunarError;
use crate::lookup_table;
use crate::names;

/// A validated proleptic Gregorian day.
///
/// Dates built with [`SolarDate::new`] lie in 1900..=2099. Conversion from
/// the last lunar months of 2099 may also yield days early in 2100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolarDate(NaiveDate);

impl SolarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, LunarError> {
        lookup_table::check_year(year)?;
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(LunarError::InvalidSolarDate { year, month, day })
    }

    pub(crate) fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, 1-based.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A validated day of the Chinese lunar calendar, lunar years 1900..=2099.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LunarDate {
    year: i32,
    month: u32,
    is_leap_month: bool,
    day: u32,
}

impl LunarDate {
    /// Validates the triple against the year table.
    ///
    /// `is_leap_month` may only be set when `month` is the year's leap month,
    /// and `day` may not exceed the length of the selected month.
    pub fn new(year: i32, month: u32, day: u32, is_leap_month: bool) -> Result<Self, LunarError> {
        let regular_length = lookup_table::month_length(year, month)?;
        let max_day = if is_leap_month {
            match lookup_table::leap_month_of(year)? {
                Some(leap) if leap == month => {
                    lookup_table::raw_leap_month_length(year).unwrap_or(regular_length)
                }
                _ => return Err(LunarError::NoLeapMonth { year, month }),
            }
        } else {
            regular_length
        };
        if day == 0 || day > max_day {
            return Err(LunarError::InvalidLunarDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self::new_unchecked(year, month, day, is_leap_month))
    }

    pub(crate) fn new_unchecked(year: i32, month: u32, day: u32, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            is_leap_month,
            day,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn is_leap_month(&self) -> bool {
        self.is_leap_month
    }

    /// Number of days in this date's month, 29 or 30.
    pub fn month_length(&self) -> u32 {
        if self.is_leap_month {
            lookup_table::raw_leap_month_length(self.year).unwrap_or(29)
        } else {
            lookup_table::raw_month_length(self.year, self.month)
        }
    }

    pub fn month_name(&self) -> String {
        names::lunar_month_name(self.month, self.is_leap_month)
    }

    pub fn day_name(&self) -> String {
        names::lunar_day_name(self.day)
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}年{}月{}", self.year, self.month_name(), self.day_name())
    }
}

/// Position in the sexagenary cycle, `0..60`, 0 being 甲子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CyclicalIndex(u32);

impl CyclicalIndex {
    pub const fn new(index: u32) -> Self {
        Self(index % 60)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Heavenly stem index, `0..10`.
    pub fn stem(&self) -> usize {
        (self.0 % 10) as usize
    }

    /// Earthly branch index, `0..12`.
    pub fn branch(&self) -> usize {
        (self.0 % 12) as usize
    }

    pub fn name(&self) -> String {
        format!(
            "{}{}",
            names::HEAVENLY_STEMS[self.stem()],
            names::EARTHLY_BRANCHES[self.branch()]
        )
    }
}

impl fmt::Display for CyclicalIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Sexagenary designations of a solar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CyclicalSet {
    pub year: CyclicalIndex,
    pub month: CyclicalIndex,
    pub day: CyclicalIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Holiday {
    pub month: u32,
    pub day: u32,
    pub name: &'static str,
}

impl Holiday {
    pub const fn new(month: u32, day: u32, name: &'static str) -> Self {
        Self { month, day, name }
    }

    pub fn falls_on(&self, month: u32, day: u32) -> bool {
        self.month == month && self.day == day
    }
}

/// One of the 28 lunar mansions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Star {
    pub name: &'static str,
    pub fortune: &'static str,
    pub direction: &'static str,
}

impl Star {
    pub const fn new(name: &'static str, fortune: &'static str, direction: &'static str) -> Self {
        Self {
            name,
            fortune,
            direction,
        }
    }

    /// Direction, star and fortune, e.g. "东方房日兔-吉".
    pub fn describe(&self) -> String {
        format!("{}{}-{}", self.direction, self.name, self.fortune)
    }
}
