//! Resolved date context: one solar day with its lunar date, sexagenary
//! designations and almanac annotations.
//!
//! An [`Almanac`] is an immutable value. Constructing one performs all
//! validation; every accessor afterwards is infallible.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};
use tracing::debug;

use crate::annotations;
use crate::config::AlmanacConfig;
use crate::convert;
use crate::cyclical;
use crate::error::LunarError;
use crate::types::{CyclicalIndex, CyclicalSet, LunarDate, SolarDate, Star};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Almanac {
    solar: SolarDate,
    lunar: LunarDate,
    cyclical: CyclicalSet,
    epoch_day: i64,
}

impl Almanac {
    /// Resolves a Gregorian day. The year must lie in 1900..=2099 and the day
    /// must not precede lunar new year 1900 (1900-01-31).
    pub fn from_solar(year: i32, month: u32, day: u32) -> Result<Self, LunarError> {
        let solar = SolarDate::new(year, month, day)?;
        Self::from_epoch_day(convert::epoch_day(solar.naive()))
    }

    /// Resolves a day given as days since 1970-01-01.
    pub fn from_epoch_day(epoch_day: i64) -> Result<Self, LunarError> {
        let lunar = convert::solar_to_lunar(epoch_day)?;
        Self::resolve(epoch_day, lunar)
    }

    /// Resolves the civil day containing a Unix millisecond timestamp, in
    /// the zone given by `config`.
    pub fn from_timestamp_millis(millis: i64, config: &AlmanacConfig) -> Result<Self, LunarError> {
        let offset = config.utc_offset()?;
        let instant = DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or(LunarError::TimestampOutOfRange { millis })?;
        let date = instant.with_timezone(&offset).date_naive();
        Self::from_epoch_day(convert::epoch_day(date))
    }

    /// Resolves a lunar day, rejecting leap flags and days the year's table
    /// does not have.
    pub fn from_lunar(year: i32, month: u32, day: u32, is_leap_month: bool) -> Result<Self, LunarError> {
        let lunar = LunarDate::new(year, month, day, is_leap_month)?;
        Self::resolve(convert::lunar_to_solar(&lunar), lunar)
    }

    fn resolve(epoch_day: i64, lunar: LunarDate) -> Result<Self, LunarError> {
        let naive = convert::date_from_epoch_day(epoch_day).ok_or(LunarError::YearOutOfRange {
            year: lunar.year(),
        })?;
        let solar = SolarDate::from_naive(naive);
        let cyclical = cyclical::cyclical_set(&solar);
        debug!(
            %solar,
            lunar_year = lunar.year(),
            lunar_month = lunar.month(),
            lunar_day = lunar.day(),
            leap = lunar.is_leap_month(),
            cyclical_day = cyclical.day.get(),
            "resolved almanac date"
        );
        Ok(Self {
            solar,
            lunar,
            cyclical,
            epoch_day,
        })
    }

    pub fn solar(&self) -> SolarDate {
        self.solar
    }

    pub fn lunar(&self) -> LunarDate {
        self.lunar
    }

    pub fn epoch_day(&self) -> i64 {
        self.epoch_day
    }

    pub fn cyclical(&self) -> CyclicalSet {
        self.cyclical
    }

    // ── Lunar fields ──

    pub fn lunar_year(&self) -> i32 {
        self.lunar.year()
    }

    pub fn lunar_month(&self) -> u32 {
        self.lunar.month()
    }

    pub fn lunar_day(&self) -> u32 {
        self.lunar.day()
    }

    pub fn is_leap_month(&self) -> bool {
        self.lunar.is_leap_month()
    }

    /// "正", "冬", "闰六" and so on.
    pub fn lunar_month_name(&self) -> String {
        self.lunar.month_name()
    }

    /// "初一" through "三十".
    pub fn lunar_day_name(&self) -> String {
        self.lunar.day_name()
    }

    /// Sexagenary name of the lunar year, turning at lunar new year.
    pub fn lunar_year_name(&self) -> String {
        cyclical::lunar_year_cyclical(self.lunar.year()).name()
    }

    pub fn days_in_lunar_month(&self) -> u32 {
        self.lunar.month_length()
    }

    // ── Sexagenary designations ──

    /// Sexagenary year, turning at 立春.
    pub fn cyclical_year(&self) -> String {
        self.cyclical.year.name()
    }

    pub fn cyclical_month(&self) -> String {
        self.cyclical.month.name()
    }

    pub fn cyclical_day(&self) -> String {
        self.cyclical.day.name()
    }

    pub fn cyclical_day_index(&self) -> CyclicalIndex {
        self.cyclical.day
    }

    // ── Annotations ──

    pub fn zodiac(&self) -> &'static str {
        annotations::zodiac(self.lunar.year())
    }

    pub fn solar_term(&self) -> Option<&'static str> {
        annotations::solar_term_name(&self.solar)
    }

    pub fn lunar_holiday(&self) -> Option<&'static str> {
        annotations::lunar_holiday(&self.lunar)
    }

    pub fn solar_holiday(&self) -> Option<&'static str> {
        annotations::solar_holiday(&self.solar)
    }

    pub fn pengzu_taboos(&self) -> (&'static str, &'static str) {
        annotations::pengzu_taboos(self.cyclical.day)
    }

    pub fn conflict(&self) -> String {
        annotations::conflict_zodiac_and_spirit(self.cyclical.day)
    }

    /// Mansion for caller-supplied week numbering.
    pub fn twenty_eight_mansion(&self, week_of_year: u32, day_of_week: u32) -> Star {
        annotations::twenty_eight_mansion(week_of_year, day_of_week)
    }

    /// Mansion using [`Self::week_of_year`] and [`Self::day_of_week`].
    pub fn mansion(&self) -> Star {
        self.twenty_eight_mansion(self.week_of_year(), self.day_of_week())
    }

    pub fn five_elements(&self) -> String {
        annotations::five_elements_and_duty(self.cyclical.day, self.cyclical.month)
    }

    pub fn fetus_god(&self) -> String {
        annotations::fetus_god_position(self.cyclical.day)
    }

    // ── Week ──

    /// 1 = Sunday .. 7 = Saturday.
    pub fn day_of_week(&self) -> u32 {
        self.solar.naive().weekday().num_days_from_sunday() + 1
    }

    pub fn day_of_week_name(&self) -> &'static str {
        annotations::weekday_name(self.day_of_week())
    }

    /// Week of year with weeks starting on Sunday and week 1 being the week
    /// that contains January 1. The last days of December belong to week 1
    /// of the next year when that week contains the next January 1.
    pub fn week_of_year(&self) -> u32 {
        week_of_year(self.solar.naive())
    }

    // ── Today ──

    pub fn is_today_at(&self, today: NaiveDate) -> bool {
        self.solar.naive() == today
    }

    /// Compares against the current day in the zone of `config`.
    pub fn is_today(&self, config: &AlmanacConfig) -> Result<bool, LunarError> {
        let offset = config.utc_offset()?;
        Ok(self.is_today_at(Utc::now().with_timezone(&offset).date_naive()))
    }
}

fn week_of_year(date: NaiveDate) -> u32 {
    let weekday = date.weekday().num_days_from_sunday();
    let week_end = date + TimeDelta::days(i64::from(6 - weekday));
    if week_end.year() > date.year() {
        return 1;
    }
    let jan1_weekday = (weekday + 7 - date.ordinal0() % 7) % 7;
    (date.ordinal0() + jan1_weekday) / 7 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_of_year_sunday_first() {
        // 2024-01-01 is a Monday.
        assert_eq!(week_of_year(ymd(2024, 1, 1)), 1);
        assert_eq!(week_of_year(ymd(2024, 1, 6)), 1);
        assert_eq!(week_of_year(ymd(2024, 1, 7)), 2);
        assert_eq!(week_of_year(ymd(2024, 2, 10)), 6);
    }

    #[test]
    fn week_of_year_rolls_into_next_year() {
        // 2024-12-29 is a Sunday; its week holds 2025-01-01.
        assert_eq!(week_of_year(ymd(2024, 12, 28)), 52);
        assert_eq!(week_of_year(ymd(2024, 12, 29)), 1);
        assert_eq!(week_of_year(ymd(2024, 12, 31)), 1);
    }
}
