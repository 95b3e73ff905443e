//! Almanac annotations derived from resolved dates.
//!
//! Every function here is total: inputs are already-validated dates and
//! sexagenary indices.

use crate::names::{
    EARTHLY_BRANCHES, EVIL_SPIRIT_DIRECTIONS, FETUS_GOD_DIRECTIONS, FETUS_GOD_EARTHLY,
    FETUS_GOD_HEAVENLY, FIVE_ELEMENTS, HEAVENLY_STEMS, LUNAR_HOLIDAYS, NEW_YEARS_EVE,
    PENGZU_EARTHLY_TABOOS, PENGZU_HEAVENLY_TABOOS, SOLAR_HOLIDAYS, TWELVE_DUTIES,
    TWENTY_EIGHT_STARS, WEEKDAYS, ZODIAC,
};
use crate::solar_terms;
use crate::types::{CyclicalIndex, LunarDate, SolarDate, Star};

pub fn zodiac(lunar_year: i32) -> &'static str {
    ZODIAC[(lunar_year - 4).rem_euclid(12) as usize]
}

/// Name of the solar term falling on `date`, if any.
pub fn solar_term_name(date: &SolarDate) -> Option<&'static str> {
    solar_terms::terms_in_month(date.month())
        .into_iter()
        .find(|&term| solar_terms::solar_term_day(date.year(), term) == date.day())
        .map(solar_terms::term_name)
}

/// Lunar festival on `date`. New Year's Eve is the last day of the twelfth
/// month, whether that is the 29th or the 30th. Leap months have none.
pub fn lunar_holiday(date: &LunarDate) -> Option<&'static str> {
    if date.is_leap_month() {
        return None;
    }
    if date.month() == 12 && date.day() == date.month_length() {
        return Some(NEW_YEARS_EVE);
    }
    LUNAR_HOLIDAYS
        .iter()
        .find(|holiday| holiday.falls_on(date.month(), date.day()))
        .map(|holiday| holiday.name)
}

pub fn solar_holiday(date: &SolarDate) -> Option<&'static str> {
    SOLAR_HOLIDAYS
        .iter()
        .find(|holiday| holiday.falls_on(date.month(), date.day()))
        .map(|holiday| holiday.name)
}

/// 彭祖百忌 for the day: the stem saying, then the branch saying.
pub fn pengzu_taboos(day: CyclicalIndex) -> (&'static str, &'static str) {
    (
        PENGZU_HEAVENLY_TABOOS[day.stem()],
        PENGZU_EARTHLY_TABOOS[day.branch()],
    )
}

/// Conflicting zodiac and evil-spirit direction, e.g. "冲狗(戊戌)煞南".
pub fn conflict_zodiac_and_spirit(day: CyclicalIndex) -> String {
    let stem = day.stem();
    let branch = day.branch();
    let conflict_stem = if stem < 6 { stem + 4 } else { stem - 6 };
    let conflict_branch = if branch < 6 { branch + 6 } else { branch - 6 };
    format!(
        "冲{}({}{})煞{}",
        ZODIAC[conflict_branch],
        HEAVENLY_STEMS[conflict_stem],
        EARTHLY_BRANCHES[conflict_branch],
        EVIL_SPIRIT_DIRECTIONS[branch % 4]
    )
}

/// Mansion for a week of year and a day of week (1 = Sunday .. 7 = Saturday).
/// Week numbering belongs to the caller.
///
/// # Panics
///
/// Panics if `week_of_year` is zero or `day_of_week` is not in `1..=7`.
pub fn twenty_eight_mansion(week_of_year: u32, day_of_week: u32) -> Star {
    TWENTY_EIGHT_STARS[((week_of_year - 1) % 4) as usize][(day_of_week - 1) as usize]
}

/// Index into [`TWELVE_DUTIES`] for a day within a month.
pub fn duty_index(day: CyclicalIndex, month: CyclicalIndex) -> usize {
    let month_branch = month.branch();
    let month_offset = if month_branch >= 2 {
        month_branch - 2
    } else {
        12 - month_branch
    };
    let base = 12 - if month_offset == 0 { 12 } else { month_offset };
    let sum = day.branch() + base;
    if sum < 12 {
        sum
    } else {
        sum - 12
    }
}

/// 纳音五行 of the day and its 建除 duty, e.g. "灯头火 满执位".
pub fn five_elements_and_duty(day: CyclicalIndex, month: CyclicalIndex) -> String {
    format!(
        "{} {}执位",
        FIVE_ELEMENTS[(day.get() / 2) as usize],
        TWELVE_DUTIES[duty_index(day, month)]
    )
}

fn fetus_god_direction_index(day: CyclicalIndex) -> usize {
    match day.get() {
        0..=1 | 56.. => 2,
        2..=5 => 3,
        6..=11 => 4,
        12..=16 => 5,
        17..=22 => 6,
        23..=27 => 7,
        28..=32 => 8,
        33..=38 => 9,
        39..=43 => 10,
        44..=49 => 0,
        50..=55 => 1,
    }
}

/// 胎神 position for the day, e.g. "占门栖房内东".
pub fn fetus_god_position(day: CyclicalIndex) -> String {
    let heavenly = FETUS_GOD_HEAVENLY[day.stem() % 5];
    let earthly = FETUS_GOD_EARTHLY[day.branch() % 5];
    let place = if heavenly.contains(earthly) {
        heavenly.to_owned()
    } else if earthly.contains(heavenly) {
        earthly.to_owned()
    } else {
        format!("{heavenly}{earthly}")
    };
    let prefix = if place.chars().count() <= 2 { "占" } else { "" };
    format!(
        "{prefix}{place}{}",
        FETUS_GOD_DIRECTIONS[fetus_god_direction_index(day)]
    )
}

/// Chinese weekday name for a day of week (1 = Sunday .. 7 = Saturday).
pub fn weekday_name(day_of_week: u32) -> &'static str {
    WEEKDAYS[(day_of_week - 1) as usize]
}
