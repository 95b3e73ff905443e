use chrono::NaiveDate;

use lunar_almanac::convert::*;
use lunar_almanac::lookup_table::{leap_month_length, leap_month_of, month_length};
use lunar_almanac::{LunarDate, LunarError};

fn epoch(y: i32, m: u32, d: u32) -> i64 {
    epoch_day(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn lunar(y: i32, m: u32, d: u32, leap: bool) -> LunarDate {
    LunarDate::new(y, m, d, leap).unwrap()
}

/// Epoch day of lunar 2099-12-30, the last convertible day (2100-02-08).
const LAST_EPOCH_DAY: i64 = 47_520;

// ── Golden vectors ──

#[test]
fn test_lunar_epoch() {
    assert_eq!(solar_to_lunar(epoch(1900, 1, 31)), Ok(lunar(1900, 1, 1, false)));
    assert_eq!(lunar_to_solar(&lunar(1900, 1, 1, false)), LUNAR_EPOCH_DAY);
}

#[test]
fn test_known_dates() {
    let cases = [
        ((2000, 1, 1), (1999, 11, 25, false)),
        ((1984, 2, 2), (1984, 1, 1, false)),
        ((2021, 2, 11), (2020, 12, 30, false)),
        ((2021, 2, 12), (2021, 1, 1, false)),
        ((2024, 2, 10), (2024, 1, 1, false)),
        ((2025, 1, 28), (2024, 12, 29, false)),
        ((1949, 10, 1), (1949, 8, 10, false)),
        ((2099, 12, 31), (2099, 11, 20, false)),
    ];
    for ((y, m, d), (ly, lm, ld, leap)) in cases {
        assert_eq!(
            solar_to_lunar(epoch(y, m, d)),
            Ok(lunar(ly, lm, ld, leap)),
            "{}-{}-{}",
            y,
            m,
            d
        );
    }
}

#[test]
fn test_leap_month_2017() {
    assert_eq!(solar_to_lunar(epoch(2017, 7, 22)), Ok(lunar(2017, 6, 29, false)));
    assert_eq!(solar_to_lunar(epoch(2017, 7, 23)), Ok(lunar(2017, 6, 1, true)));
    assert_eq!(solar_to_lunar(epoch(2017, 8, 21)), Ok(lunar(2017, 6, 30, true)));
    assert_eq!(solar_to_lunar(epoch(2017, 8, 22)), Ok(lunar(2017, 7, 1, false)));
    assert_eq!(lunar_to_solar(&lunar(2017, 6, 1, true)), epoch(2017, 7, 23));
    assert_eq!(lunar_to_solar(&lunar(2017, 7, 1, false)), epoch(2017, 8, 22));
}

// ── Range ──

#[test]
fn test_before_epoch_rejected() {
    let day = epoch(1900, 1, 30);
    assert_eq!(solar_to_lunar(day), Err(LunarError::BeforeEpoch { epoch_day: day }));
}

#[test]
fn test_last_convertible_day() {
    assert_eq!(
        date_from_epoch_day(LAST_EPOCH_DAY),
        NaiveDate::from_ymd_opt(2100, 2, 8)
    );
    assert_eq!(solar_to_lunar(LAST_EPOCH_DAY), Ok(lunar(2099, 12, 30, false)));
    assert_eq!(
        solar_to_lunar(LAST_EPOCH_DAY + 1),
        Err(LunarError::YearOutOfRange { year: 2100 })
    );
}

#[test]
fn test_far_future_epoch_day_rejected() {
    let out_of_range = Err(LunarError::YearOutOfRange { year: 2100 });
    assert_eq!(solar_to_lunar(i64::MAX), out_of_range);
    assert_eq!(solar_to_lunar(i64::MAX - 100), out_of_range);
    assert_eq!(solar_to_lunar(LAST_EPOCH_DAY + 1_000_000), out_of_range);
}

#[test]
fn test_far_past_epoch_day_rejected() {
    assert_eq!(
        solar_to_lunar(i64::MIN),
        Err(LunarError::BeforeEpoch { epoch_day: i64::MIN })
    );
}

// ── Round trip ──

#[test]
fn test_round_trip_every_epoch_day() {
    for day in LUNAR_EPOCH_DAY..=LAST_EPOCH_DAY {
        let date = solar_to_lunar(day).unwrap();
        assert_eq!(lunar_to_solar(&date), day, "epoch day {} -> {:?}", day, date);
    }
}

#[test]
fn test_round_trip_every_lunar_date() {
    let mut expected = LUNAR_EPOCH_DAY;
    for year in 1900..=2099 {
        let leap = leap_month_of(year).unwrap();
        for month in 1..=12 {
            let mut months = vec![(false, month_length(year, month).unwrap())];
            if leap == Some(month) {
                months.push((true, leap_month_length(year).unwrap().unwrap()));
            }
            for (is_leap, length) in months {
                for day in 1..=length {
                    let date = lunar(year, month, day, is_leap);
                    let solar = lunar_to_solar(&date);
                    assert_eq!(solar, expected, "{:?}", date);
                    assert_eq!(solar_to_lunar(solar), Ok(date));
                    expected += 1;
                }
            }
        }
    }
    assert_eq!(expected, LAST_EPOCH_DAY + 1);
}

#[test]
fn test_lunar_days_are_consecutive() {
    let mut prev = solar_to_lunar(LUNAR_EPOCH_DAY).unwrap();
    for day in (LUNAR_EPOCH_DAY + 1)..=LAST_EPOCH_DAY {
        let next = solar_to_lunar(day).unwrap();
        if next.day() == 1 {
            assert_eq!(prev.day(), prev.month_length(), "month end before {:?}", next);
        } else {
            assert_eq!(next.day(), prev.day() + 1);
            assert_eq!((next.year(), next.month(), next.is_leap_month()),
                (prev.year(), prev.month(), prev.is_leap_month()));
        }
        assert!(next > prev);
        prev = next;
    }
}

// ── Epoch day helpers ──

#[test]
fn test_epoch_day_roundtrip() {
    for day in [-25567, -25537, -1, 0, 1, 10957, 19763, 47520] {
        assert_eq!(date_from_epoch_day(day).map(epoch_day), Some(day));
    }
}

#[test]
fn test_date_from_epoch_day_out_of_chrono_range() {
    assert_eq!(date_from_epoch_day(i64::MAX), None);
    assert_eq!(date_from_epoch_day(i64::MIN), None);
}
