//! Sexagenary year, month and day of a solar date.
//!
//! The year turns at 立春 and the month at the first term (节) of each
//! Gregorian month, both as dated by [`crate::solar_terms`].

use crate::convert;
use crate::solar_terms;
use crate::types::{CyclicalIndex, CyclicalSet, SolarDate};

/// Offset of 1900's sexagenary year (庚子 is 36) from 甲子.
const YEAR_OFFSET: i32 = 36;

/// Days from 1900-01-01 to the Unix epoch, plus the 10 that put 1900-01-01 on 甲戌.
pub const DAY_CALIBRATION: i64 = 25_567 + 10;

const START_OF_SPRING: usize = 2;

pub fn cyclical_year(date: &SolarDate) -> CyclicalIndex {
    let spring_day = solar_terms::solar_term_day(date.year(), START_OF_SPRING);
    let before_spring = date.month() < 2 || (date.month() == 2 && date.day() < spring_day);
    let index = date.year() - 1900 + YEAR_OFFSET - i32::from(before_spring);
    CyclicalIndex::new(index as u32)
}

pub fn cyclical_month(date: &SolarDate) -> CyclicalIndex {
    let month0 = date.month() as i32 - 1;
    let [node, _] = solar_terms::terms_in_month(date.month());
    let node_day = solar_terms::solar_term_day(date.year(), node);
    let base = (date.year() - 1900) * 12 + month0 + 12;
    let index = if date.day() < node_day { base } else { base + 1 };
    CyclicalIndex::new(index as u32)
}

/// Day designation of an epoch day; advances by one each day.
pub fn cyclical_day(epoch_day: i64) -> CyclicalIndex {
    CyclicalIndex::new((epoch_day + DAY_CALIBRATION).rem_euclid(60) as u32)
}

pub fn cyclical_set(date: &SolarDate) -> CyclicalSet {
    CyclicalSet {
        year: cyclical_year(date),
        month: cyclical_month(date),
        day: cyclical_day(convert::epoch_day(date.naive())),
    }
}

/// Designation of a lunar year counted by lunar new year rather than 立春.
pub fn lunar_year_cyclical(lunar_year: i32) -> CyclicalIndex {
    CyclicalIndex::new((lunar_year - 1900 + YEAR_OFFSET) as u32)
}
