//! Fixed Chinese name tables used by the almanac annotations.

use crate::types::{Holiday, Star};

pub const HEAVENLY_STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

pub const EARTHLY_BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

pub const ZODIAC: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// Solar term names, 小寒 first, two per Gregorian month.
pub const SOLAR_TERMS: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨",
    "立夏", "小满", "芒种", "夏至", "小暑", "大暑", "立秋", "处暑",
    "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

pub const LUNAR_NUMERALS: [&str; 10] = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 初, 十, 廿, 卅 prefix days; 正, 冬, 腊 name months 1, 11, 12; 闰 marks a leap month.
pub const LUNAR_SPECIAL_WORDS: [&str; 8] = ["初", "十", "廿", "卅", "正", "冬", "腊", "闰"];

/// Indexed by day of week minus one, Sunday first.
pub const WEEKDAYS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

pub const NEW_YEARS_EVE: &str = "除夕";

pub const LUNAR_HOLIDAYS: [Holiday; 10] = [
    Holiday::new(1, 1, "春节"),
    Holiday::new(1, 15, "元宵节"),
    Holiday::new(5, 5, "端午节"),
    Holiday::new(7, 7, "七夕节"),
    Holiday::new(7, 15, "中元节"),
    Holiday::new(8, 15, "中秋节"),
    Holiday::new(9, 9, "重阳节"),
    Holiday::new(12, 8, "腊八节"),
    Holiday::new(12, 23, "北方小年"),
    Holiday::new(12, 24, "南方小年"),
];

pub const SOLAR_HOLIDAYS: [Holiday; 23] = [
    Holiday::new(1, 1, "元旦节"),
    Holiday::new(2, 14, "情人节"),
    Holiday::new(3, 8, "妇女节"),
    Holiday::new(3, 12, "植树节"),
    Holiday::new(3, 15, "消费者权益日"),
    Holiday::new(3, 21, "世界森林日"),
    Holiday::new(4, 1, "愚人节"),
    Holiday::new(4, 7, "世界卫生日"),
    Holiday::new(4, 22, "世界地球日"),
    Holiday::new(5, 1, "劳动节"),
    Holiday::new(5, 4, "青年节"),
    Holiday::new(5, 31, "世界无烟日"),
    Holiday::new(6, 1, "儿童节"),
    Holiday::new(6, 26, "禁毒日"),
    Holiday::new(7, 1, "建党节"),
    Holiday::new(8, 1, "建军节"),
    Holiday::new(8, 15, "抗战胜利"),
    Holiday::new(9, 10, "教师节"),
    Holiday::new(9, 28, "孔子诞辰"),
    Holiday::new(10, 1, "国庆节"),
    Holiday::new(12, 20, "澳门回归"),
    Holiday::new(12, 24, "平安夜"),
    Holiday::new(12, 25, "圣诞节"),
];

/// 彭祖百忌 by heavenly stem.
pub const PENGZU_HEAVENLY_TABOOS: [&str; 10] = [
    "甲不开仓\n财物耗亡",
    "乙不栽植\n千株不长",
    "丙不修灶\n必见灾殃",
    "丁不剃头\n头主生疮",
    "戊不受田\n田主不祥",
    "己不破券\n二比并亡",
    "庚不经络\n织机虚张",
    "辛不合酱\n主人不尝",
    "壬不决水\n更难提防",
    "癸不词讼\n理弱敌强",
];

/// 彭祖百忌 by earthly branch.
pub const PENGZU_EARTHLY_TABOOS: [&str; 12] = [
    "子不问卜\n自惹祸殃",
    "丑不冠带\n主不还乡",
    "寅不祭祀\n神鬼不尝",
    "卯不穿井\n水泉不香",
    "辰不哭泣\n必主重丧",
    "巳不远行\n财物伏藏",
    "午不苫盖\n屋主更张",
    "未不服药\n毒气入肠",
    "申不安床\n鬼祟入房",
    "酉不宴客\n醉坐颠狂",
    "戌不吃犬\n作怪上床",
    "亥不嫁娶\n不利新郎",
];

pub const EVIL_SPIRIT_DIRECTIONS: [&str; 4] = ["南", "东", "北", "西"];

pub const FETUS_GOD_DIRECTIONS: [&str; 11] = [
    "外东北", "外正东", "外东南", "外正南", "外西南", "外正西", "外西北", "外正北", "房内北",
    "房内南", "房内东",
];

pub const FETUS_GOD_HEAVENLY: [&str; 5] = ["门", "碓磨", "厨灶", "仓库", "房床"];

pub const FETUS_GOD_EARTHLY: [&str; 6] = ["碓", "厕", "炉灶", "大门", "栖", "床"];

pub const TWELVE_DUTIES: [&str; 12] = [
    "开", "闭", "建", "除", "满", "平", "定", "执", "破", "危", "成", "收",
];

/// 纳音五行, one per consecutive pair of sexagenary indices.
pub const FIVE_ELEMENTS: [&str; 30] = [
    "海中金", "炉中火", "大林木", "路旁土", "剑锋金", "山头火", "涧下水", "城头土", "白蜡金",
    "杨柳木", "泉中水", "屋上土", "霹雳火", "松柏木", "长流水", "砂石金", "山下火", "平地木",
    "壁上土", "金箔金", "灯头火", "天河水", "大驿土", "钗钏金", "桑柘木", "大溪水", "沙中土",
    "天上火", "石榴木", "大海水",
];

/// 二十八宿, rows cycle with the week of year and columns with the weekday.
pub const TWENTY_EIGHT_STARS: [[Star; 7]; 4] = [
    [
        Star::new("房日兔", "吉", "东方"),
        Star::new("心月狐", "凶", "东方"),
        Star::new("尾火虎", "吉", "东方"),
        Star::new("箕水豹", "吉", "东方"),
        Star::new("角木蛟", "吉", "东方"),
        Star::new("亢金龙", "凶", "东方"),
        Star::new("氐土貉", "凶", "东方"),
    ],
    [
        Star::new("虚日鼠", "凶", "北方"),
        Star::new("危月燕", "凶", "北方"),
        Star::new("室火猪", "吉", "北方"),
        Star::new("壁水貐", "吉", "北方"),
        Star::new("斗木獬", "吉", "北方"),
        Star::new("牛金牛", "凶", "北方"),
        Star::new("女士蝠", "凶", "北方"),
    ],
    [
        Star::new("昴日鸡", "凶", "西方"),
        Star::new("毕月乌", "吉", "西方"),
        Star::new("觜火猴", "凶", "西方"),
        Star::new("参水猿", "凶", "西方"),
        Star::new("奎水狼", "凶", "西方"),
        Star::new("娄金狗", "吉", "西方"),
        Star::new("胃土雉", "吉", "西方"),
    ],
    [
        Star::new("星日马", "凶", "南方"),
        Star::new("张月鹿", "吉", "南方"),
        Star::new("翼火蛇", "凶", "南方"),
        Star::new("轸水蚓", "吉", "南方"),
        Star::new("井木犴", "吉", "南方"),
        Star::new("鬼金羊", "凶", "南方"),
        Star::new("柳土獐", "凶", "南方"),
    ],
];

/// Name of a lunar month, e.g. "正", "冬", "闰六".
///
/// # Panics
///
/// Panics if `month` is not in `1..=12`.
pub fn lunar_month_name(month: u32, is_leap: bool) -> String {
    let name = match month {
        1 => LUNAR_SPECIAL_WORDS[4],
        10 => LUNAR_SPECIAL_WORDS[1],
        11 => LUNAR_SPECIAL_WORDS[5],
        12 => LUNAR_SPECIAL_WORDS[6],
        2..=9 => LUNAR_NUMERALS[month as usize],
        _ => panic!("lunar month {month} not in 1..=12"),
    };
    if is_leap {
        format!("{}{}", LUNAR_SPECIAL_WORDS[7], name)
    } else {
        name.to_owned()
    }
}

/// Name of a lunar day: "初一".."初十", "十一".."十九", "二十", "廿一".."廿九", "三十".
///
/// # Panics
///
/// Panics if `day` is not in `1..=30`.
pub fn lunar_day_name(day: u32) -> String {
    let unit = LUNAR_NUMERALS[(day % 10) as usize];
    match day {
        1..=9 => format!("{}{}", LUNAR_SPECIAL_WORDS[0], unit),
        10 => format!("{}{}", LUNAR_SPECIAL_WORDS[0], LUNAR_SPECIAL_WORDS[1]),
        11..=19 => format!("{}{}", LUNAR_SPECIAL_WORDS[1], unit),
        // Written out in full, not as "廿十"/"卅十".
        20 | 30 => format!("{}{}", LUNAR_NUMERALS[(day / 10) as usize], LUNAR_SPECIAL_WORDS[1]),
        21..=29 => format!("{}{}", LUNAR_SPECIAL_WORDS[2], unit),
        _ => panic!("lunar day {day} not in 1..=30"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names() {
        for (month, is_leap, expected) in [
            (1, false, "正"),
            (2, false, "二"),
            (6, true, "闰六"),
            (10, false, "十"),
            (11, false, "冬"),
            (12, false, "腊"),
        ] {
            assert_eq!(lunar_month_name(month, is_leap), expected);
        }
    }

    #[test]
    fn day_names() {
        for (day, expected) in [
            (1, "初一"),
            (10, "初十"),
            (11, "十一"),
            (19, "十九"),
            (20, "二十"),
            (21, "廿一"),
            (29, "廿九"),
            (30, "三十"),
        ] {
            assert_eq!(lunar_day_name(day), expected);
        }
    }

    #[test]
    #[should_panic]
    fn day_name_rejects_zero() {
        lunar_day_name(0);
    }

    #[test]
    fn holiday_tables_are_sorted_by_date() {
        for table in [&LUNAR_HOLIDAYS[..], &SOLAR_HOLIDAYS[..]] {
            for pair in table.windows(2) {
                assert!((pair[0].month, pair[0].day) < (pair[1].month, pair[1].day));
            }
        }
    }
}
