pub mod almanac;
pub mod annotations;
pub mod config;
pub mod convert;
pub mod cyclical;
pub mod error;
pub mod lookup_table;
pub mod names;
pub mod solar_terms;
pub mod types;

pub use almanac::Almanac;

pub use annotations::{
    conflict_zodiac_and_spirit, duty_index, fetus_god_position, five_elements_and_duty,
    lunar_holiday, pengzu_taboos, solar_holiday, solar_term_name, twenty_eight_mansion,
    weekday_name, zodiac,
};

pub use config::AlmanacConfig;

pub use convert::{date_from_epoch_day, epoch_day, lunar_to_solar, solar_to_lunar, LUNAR_EPOCH_DAY};

pub use cyclical::{cyclical_day, cyclical_month, cyclical_set, cyclical_year, lunar_year_cyclical};

pub use error::LunarError;

pub use lookup_table::{
    leap_month_length, leap_month_of, month_length, solar_term_offset_minutes, year_length,
    FIRST_YEAR, LAST_YEAR,
};

pub use solar_terms::{solar_term_date, solar_term_day, solar_term_instant, terms_in_month};

pub use types::{CyclicalIndex, CyclicalSet, Holiday, LunarDate, SolarDate, Star};
