use std::env;

use tracing_subscriber::EnvFilter;

use lunar_almanac::{Almanac, AlmanacConfig, LunarError};

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lunar_almanac=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), LunarError> {
    init_logging();

    let args: Vec<i32> = env::args().skip(1).filter_map(|a| a.parse().ok()).collect();
    let config = AlmanacConfig::default();
    let almanac = match args[..] {
        [y, m, d] => Almanac::from_solar(y, m as u32, d as u32)?,
        _ => Almanac::from_solar(2024, 2, 10)?,
    };

    let lunar = almanac.lunar();
    let (heavenly, earthly) = almanac.pengzu_taboos();

    println!("=== Lunar Almanac ===");
    println!(
        "Solar date: {} (星期{})",
        almanac.solar(),
        almanac.day_of_week_name()
    );
    println!("Lunar date: {}", lunar);
    println!(
        "Year: {}年 [{}] / 干支 {}年 {}月 {}日",
        almanac.lunar_year_name(),
        almanac.zodiac(),
        almanac.cyclical_year(),
        almanac.cyclical_month(),
        almanac.cyclical_day()
    );
    println!();
    println!("--- Festivals ---");
    println!("Solar term: {}", almanac.solar_term().unwrap_or("-"));
    println!("Lunar holiday: {}", almanac.lunar_holiday().unwrap_or("-"));
    println!("Solar holiday: {}", almanac.solar_holiday().unwrap_or("-"));
    println!();
    println!("--- Almanac ---");
    println!("彭祖百忌: {} / {}", heavenly.replace('\n', " "), earthly.replace('\n', " "));
    println!("冲煞: {}", almanac.conflict());
    println!("星宿: {}", almanac.mansion().describe());
    println!("五行: {}", almanac.five_elements());
    println!("胎神: {}", almanac.fetus_god());
    println!("Today: {}", almanac.is_today(&config)?);

    Ok(())
}
