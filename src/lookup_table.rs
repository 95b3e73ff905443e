//! Packed lunar year table and its decoders.
//!
//! Each year is one 16-bit word. Bits 15 down to 4 flag the twelve regular
//! months in order (set = 30 days, clear = 29 days). The low nibble holds the
//! leap month number, or `0`/`0xF` when the year has none. A low nibble of
//! `0xF` also records that the previous year's leap month has 30 days.

use crate::error::LunarError;

pub const FIRST_YEAR: i32 = 1900;
pub const LAST_YEAR: i32 = 2099;

/// Lunar years 1900..=2100. The 2100 word is only read for the length of
/// the 2099 leap month.
const LUNAR_YEAR_INFO: [u32; 201] = [
    0x4bd8, 0x4ae0, 0xa570, 0x54d5, 0xd260, 0xd950, 0x5554, 0x56af,
    0x9ad0, 0x55d2, 0x4ae0, 0xa5b6, 0xa4d0, 0xd250, 0xd295, 0xb54f,
    0xd6a0, 0xada2, 0x95b0, 0x4977, 0x497f, 0xa4b0, 0xb4b5, 0x6a50,
    0x6d40, 0xab54, 0x2b6f, 0x9570, 0x52f2, 0x4970, 0x6566, 0xd4a0,
    0xea50, 0x6a95, 0x5adf, 0x2b60, 0x86e3, 0x92ef, 0xc8d7, 0xc95f,
    0xd4a0, 0xd8a6, 0xb55f, 0x56a0, 0xa5b4, 0x25df, 0x92d0, 0xd2b2,
    0xa950, 0xb557, 0x6ca0, 0xb550, 0x5355, 0x4daf, 0xa5b0, 0x4573,
    0x52bf, 0xa9a8, 0xe950, 0x6aa0, 0xaea6, 0xab50, 0x4b60, 0xaae4,
    0xa570, 0x5260, 0xf263, 0xd950, 0x5b57, 0x56a0, 0x96d0, 0x4dd5,
    0x4ad0, 0xa4d0, 0xd4d4, 0xd250, 0xd558, 0xb540, 0xb6a0, 0x95a6,
    0x95bf, 0x49b0, 0xa974, 0xa4b0, 0xb27a, 0x6a50, 0x6d40, 0xaf46,
    0xab60, 0x9570, 0x4af5, 0x4970, 0x64b0, 0x74a3, 0xea50, 0x6b58,
    0x5ac0, 0xab60, 0x96d5, 0x92e0, 0xc960, 0xd954, 0xd4a0, 0xda50,
    0x7552, 0x56a0, 0xabb7, 0x25d0, 0x92d0, 0xcab5, 0xa950, 0xb4a0,
    0xbaa4, 0xad50, 0x55d9, 0x4ba0, 0xa5b0, 0x5176, 0x52bf, 0xa930,
    0x7954, 0x6aa0, 0xad50, 0x5b52, 0x4b60, 0xa6e6, 0xa4e0, 0xd260,
    0xea65, 0xd530, 0x5aa0, 0x76a3, 0x96d0, 0x4afb, 0x4ad0, 0xa4d0,
    0xd0b6, 0xd25f, 0xd520, 0xdd45, 0xb5a0, 0x56d0, 0x55b2, 0x49b0,
    0xa577, 0xa4b0, 0xaa50, 0xb255, 0x6d2f, 0xada0, 0x4b63, 0x937f,
    0x49f8, 0x4970, 0x64b0, 0x68a6, 0xea5f, 0x6b20, 0xa6c4, 0xaaef,
    0x92e0, 0xd2e3, 0xc960, 0xd557, 0xd4a0, 0xda50, 0x5d55, 0x56a0,
    0xa6d0, 0x55d4, 0x52d0, 0xa9b8, 0xa950, 0xb4a0, 0xb6a6, 0xad50,
    0x55a0, 0xaba4, 0xa5b0, 0x52b0, 0xb273, 0x6930, 0x7337, 0x6aa0,
    0xad50, 0x4b55, 0x4b6f, 0xa570, 0x54e4, 0xd260, 0xe968, 0xd520,
    0xdaa0, 0x6aa6, 0x56df, 0x4ae0, 0xa9d4, 0xa4d0, 0xd150, 0xf252,
    0xd520,
];

/// Minutes from the start of each solar term's year to the term, 小寒 first.
pub const SOLAR_TERM_MINUTES: [i64; 24] = [
    0, 21208, 42467, 63836, 85337, 107014, 128867, 150921,
    173149, 195551, 218072, 240693, 263343, 285989, 308563, 331033,
    353350, 375494, 397447, 419210, 440795, 462224, 483532, 504758,
];

const LEAP_NIBBLE: u32 = 0xf;
const LONG_LEAP_SENTINEL: u32 = 0xf;
const MIN_YEAR_DAYS: u32 = 12 * 29;

pub fn check_year(year: i32) -> Result<(), LunarError> {
    if (FIRST_YEAR..=LAST_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(LunarError::YearOutOfRange { year })
    }
}

fn check_month(month: u32) -> Result<(), LunarError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(LunarError::InvalidLunarMonth { month })
    }
}

// Callers must have checked the year.
fn info(year: i32) -> u32 {
    LUNAR_YEAR_INFO[(year - FIRST_YEAR) as usize]
}

pub(crate) fn raw_leap_month(year: i32) -> Option<u32> {
    match info(year) & LEAP_NIBBLE {
        0 | LONG_LEAP_SENTINEL => None,
        month => Some(month),
    }
}

pub(crate) fn raw_month_length(year: i32, month: u32) -> u32 {
    if info(year) & (0x10000 >> month) != 0 {
        30
    } else {
        29
    }
}

pub(crate) fn raw_leap_month_length(year: i32) -> Option<u32> {
    raw_leap_month(year)?;
    let next = LUNAR_YEAR_INFO[(year - FIRST_YEAR + 1) as usize];
    Some(if next & LEAP_NIBBLE == LONG_LEAP_SENTINEL {
        30
    } else {
        29
    })
}

pub(crate) fn raw_year_length(year: i32) -> u32 {
    let long_months = (1..=12)
        .filter(|&month| raw_month_length(year, month) == 30)
        .count() as u32;
    MIN_YEAR_DAYS + long_months + raw_leap_month_length(year).unwrap_or(0)
}

/// Returns the leap month number of `year`, or `None` if it has none.
pub fn leap_month_of(year: i32) -> Result<Option<u32>, LunarError> {
    check_year(year)?;
    Ok(raw_leap_month(year))
}

/// Returns the length (29 or 30) of the regular month `month` of `year`.
pub fn month_length(year: i32, month: u32) -> Result<u32, LunarError> {
    check_year(year)?;
    check_month(month)?;
    Ok(raw_month_length(year, month))
}

/// Returns the length of the leap month of `year`, or `None` if it has none.
pub fn leap_month_length(year: i32) -> Result<Option<u32>, LunarError> {
    check_year(year)?;
    Ok(raw_leap_month_length(year))
}

/// Returns the number of days in lunar `year`, leap month included.
pub fn year_length(year: i32) -> Result<u32, LunarError> {
    check_year(year)?;
    Ok(raw_year_length(year))
}

/// # Panics
///
/// Panics if `index` is not in `0..24`.
pub fn solar_term_offset_minutes(index: usize) -> i64 {
    SOLAR_TERM_MINUTES[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_nibbles_are_well_formed() {
        for (i, &word) in LUNAR_YEAR_INFO.iter().enumerate() {
            let nibble = word & LEAP_NIBBLE;
            assert!(
                nibble == 0 || nibble == LONG_LEAP_SENTINEL || (1..=12).contains(&nibble),
                "year {}: nibble {:#x}",
                1900 + i,
                nibble
            );
            if nibble == LONG_LEAP_SENTINEL {
                let prev = LUNAR_YEAR_INFO[i - 1] & LEAP_NIBBLE;
                assert!((1..=12).contains(&prev), "year {}: 0xF after no leap", 1900 + i);
            }
        }
    }

    #[test]
    fn table_covers_2100_for_last_leap_length() {
        assert_eq!(LUNAR_YEAR_INFO.len(), (LAST_YEAR - FIRST_YEAR + 2) as usize);
    }

    #[test]
    fn first_year_decodes() {
        assert_eq!(raw_leap_month(1900), Some(8));
        assert_eq!(raw_leap_month_length(1900), Some(29));
        assert_eq!(raw_year_length(1900), 384);
    }

    #[test]
    fn check_month_rejects_zero_and_thirteen() {
        assert!(check_month(0).is_err());
        assert!(check_month(13).is_err());
        assert!(check_month(12).is_ok());
    }
}
