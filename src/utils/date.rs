//! Date parsing and letter-based date formatting for permalink tokens.
//!
//! Dates in item data arrive either as text (`"2024-06-15"`,
//! `"2024-06-15T14:30:45Z"`, `"June 15, 2024"`, `"@1718461845"`) or as unix
//! timestamps. Both become a wall-clock [`NaiveDateTime`]; offsets carried by
//! the text are kept as-is rather than converted, so `2024-06-15T23:00:00+09:00`
//! still formats as the 15th.
//!
//! # Format letters
//!
//! `{date|Y/m/d}` uses single-letter format codes:
//!
//! | Letter | Output                 | Letter | Output                   |
//! |--------|------------------------|--------|--------------------------|
//! | `d`    | day, `01`–`31`         | `j`    | day, `1`–`31`            |
//! | `D`    | `Mon`–`Sun`            | `l`    | `Monday`–`Sunday`        |
//! | `N`    | ISO weekday `1`–`7`    | `w`    | weekday `0` (Sun)–`6`    |
//! | `S`    | `st`/`nd`/`rd`/`th`    | `z`    | day of year, from `0`    |
//! | `W`    | ISO week, `01`–`53`    | `o`    | ISO week-numbering year  |
//! | `F`    | `January`–`December`   | `M`    | `Jan`–`Dec`              |
//! | `m`    | month, `01`–`12`       | `n`    | month, `1`–`12`          |
//! | `t`    | days in month          | `L`    | leap year `1`/`0`        |
//! | `Y`    | year, 4 digits         | `y`    | year, 2 digits           |
//! | `a`    | `am`/`pm`              | `A`    | `AM`/`PM`                |
//! | `g`    | hour 12h, `1`–`12`     | `G`    | hour 24h, `0`–`23`       |
//! | `h`    | hour 12h, `01`–`12`    | `H`    | hour 24h, `00`–`23`      |
//! | `i`    | minutes                | `s`    | seconds                  |
//! | `u`    | microseconds           | `v`    | milliseconds             |
//! | `e`/`T`| `UTC`                  | `P`/`O`| `+00:00` / `+0000`       |
//! | `Z`    | offset seconds (`0`)   | `U`    | unix timestamp           |
//! | `c`    | ISO 8601               | `r`    | RFC 2822                 |
//!
//! Any other character is copied; `\` escapes the next character.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde_json::Value as JsonValue;

/// Date-only layouts tried after the full datetime layouts.
const DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Datetime layouts without offset.
const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse textual date. Returns `None` for anything unrecognized.
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(secs) = text.strip_prefix('@') {
        return secs.parse().ok().and_then(from_timestamp);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.naive_local());
    }

    DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
        .or_else(|| {
            DATE_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDate::parse_from_str(text, layout).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Interpret seconds since the unix epoch (UTC).
pub fn from_timestamp(secs: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(secs, 0).map(|dt| dt.naive_utc())
}

/// Turn an item value into a datetime.
///
/// Text is parsed as a date first; integer-looking text that isn't a date is
/// taken as a timestamp. Numbers are timestamps.
pub fn datetime_from_value(value: &JsonValue) -> Option<NaiveDateTime> {
    match value {
        JsonValue::String(text) => parse_date(text)
            .or_else(|| text.trim().parse::<i64>().ok().and_then(from_timestamp)),
        #[allow(clippy::cast_possible_truncation)] // Fractional seconds are dropped
        JsonValue::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(from_timestamp),
        _ => None,
    }
}

/// Format `value` with `format`, empty string if it isn't a date.
pub fn format_value(value: &JsonValue, format: &str) -> String {
    datetime_from_value(value)
        .map(|dt| format_date(&dt, format))
        .unwrap_or_default()
}

/// Render a datetime with single-letter format codes (see module docs).
pub fn format_date(dt: &NaiveDateTime, format: &str) -> String {
    let mut out = String::with_capacity(format.len() * 2);
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            'd' => out.push_str(&format!("{:02}", dt.day())),
            'D' => out.push_str(&dt.format("%a").to_string()),
            'j' => out.push_str(&dt.day().to_string()),
            'l' => out.push_str(&dt.format("%A").to_string()),
            'N' => out.push_str(&dt.weekday().number_from_monday().to_string()),
            'S' => out.push_str(ordinal_suffix(dt.day())),
            'w' => out.push_str(&dt.weekday().num_days_from_sunday().to_string()),
            'z' => out.push_str(&dt.ordinal0().to_string()),
            'W' => out.push_str(&format!("{:02}", dt.iso_week().week())),
            'o' => out.push_str(&dt.iso_week().year().to_string()),
            'F' => out.push_str(&dt.format("%B").to_string()),
            'M' => out.push_str(&dt.format("%b").to_string()),
            'm' => out.push_str(&format!("{:02}", dt.month())),
            'n' => out.push_str(&dt.month().to_string()),
            't' => out.push_str(&days_in_month(dt.year(), dt.month()).to_string()),
            'L' => out.push(if is_leap_year(dt.year()) { '1' } else { '0' }),
            'Y' => out.push_str(&format!("{:04}", dt.year())),
            'y' => out.push_str(&format!("{:02}", dt.year().rem_euclid(100))),
            'a' => out.push_str(if dt.hour() < 12 { "am" } else { "pm" }),
            'A' => out.push_str(if dt.hour() < 12 { "AM" } else { "PM" }),
            'g' => out.push_str(&dt.hour12().1.to_string()),
            'G' => out.push_str(&dt.hour().to_string()),
            'h' => out.push_str(&format!("{:02}", dt.hour12().1)),
            'H' => out.push_str(&format!("{:02}", dt.hour())),
            'i' => out.push_str(&format!("{:02}", dt.minute())),
            's' => out.push_str(&format!("{:02}", dt.second())),
            'u' => out.push_str(&format!("{:06}", dt.nanosecond() / 1_000)),
            'v' => out.push_str(&format!("{:03}", dt.nanosecond() / 1_000_000)),
            'e' | 'T' => out.push_str("UTC"),
            'P' => out.push_str("+00:00"),
            'O' => out.push_str("+0000"),
            'Z' => out.push('0'),
            'U' => out.push_str(&dt.and_utc().timestamp().to_string()),
            'c' => out.push_str(&dt.format("%Y-%m-%dT%H:%M:%S+00:00").to_string()),
            'r' => out.push_str(&dt.format("%a, %d %b %Y %H:%M:%S +0000").to_string()),
            other => out.push(other),
        }
    }

    out
}

const fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dt(s: &str) -> NaiveDateTime {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 3, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        for input in [
            "2023-03-15",
            "2023/03/15",
            "March 15, 2023",
            "Mar 15, 2023",
            "15 March 2023",
            " 2023-03-15 ",
        ] {
            assert_eq!(parse_date(input), Some(expected), "failed for {input:?}");
        }
    }

    #[test]
    fn test_parse_datetime_formats() {
        let parsed = dt("2024-06-15T14:30:45Z");
        assert_eq!((parsed.hour(), parsed.minute(), parsed.second()), (14, 30, 45));

        let parsed = dt("2024-06-15 14:30");
        assert_eq!((parsed.hour(), parsed.minute()), (14, 30));

        // Offset is kept as wall-clock time
        let parsed = dt("2024-06-15T23:00:00+09:00");
        assert_eq!((parsed.day(), parsed.hour()), (15, 23));
    }

    #[test]
    fn test_parse_date_invalid() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2023-13-45"), None);
        assert_eq!(parse_date("@abc"), None);
    }

    #[test]
    fn test_parse_at_timestamp() {
        assert_eq!(dt("@0"), from_timestamp(0).unwrap());
    }

    #[test]
    fn test_datetime_from_value() {
        // 2023-03-15T00:00:00Z
        let ts = 1_678_838_400;
        let expected = dt("2023-03-15");

        assert_eq!(datetime_from_value(&json!("2023-03-15")), Some(expected));
        assert_eq!(datetime_from_value(&json!(ts)), Some(expected));
        assert_eq!(datetime_from_value(&json!(ts.to_string())), Some(expected));
        assert_eq!(datetime_from_value(&json!(true)), None);
        assert_eq!(datetime_from_value(&json!("soon")), None);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("2023-03-15"), "Y/m"), "2023/03");
        assert_eq!(format_value(&json!("garbage"), "Y/m"), "");
    }

    #[test]
    fn test_format_letters() {
        let d = dt("2024-02-09T07:05:03Z");
        assert_eq!(format_date(&d, "Y-m-d"), "2024-02-09");
        assert_eq!(format_date(&d, "y n j"), "24 2 9");
        assert_eq!(format_date(&d, "D, l"), "Fri, Friday");
        assert_eq!(format_date(&d, "M F"), "Feb February");
        assert_eq!(format_date(&d, "N w z"), "5 5 39");
        assert_eq!(format_date(&d, "t L"), "29 1");
        assert_eq!(format_date(&d, "H:i:s"), "07:05:03");
        assert_eq!(format_date(&d, "g G h A a"), "7 7 07 AM am");
        assert_eq!(format_date(&d, "W o"), "06 2024");
        assert_eq!(format_date(&d, "U"), "1707462303");
    }

    #[test]
    fn test_format_ordinal_suffix() {
        assert_eq!(format_date(&dt("2024-01-01"), "jS"), "1st");
        assert_eq!(format_date(&dt("2024-01-02"), "jS"), "2nd");
        assert_eq!(format_date(&dt("2024-01-03"), "jS"), "3rd");
        assert_eq!(format_date(&dt("2024-01-11"), "jS"), "11th");
        assert_eq!(format_date(&dt("2024-01-22"), "jS"), "22nd");
    }

    #[test]
    fn test_format_escape_and_literals() {
        let d = dt("2024-06-15");
        assert_eq!(format_date(&d, "\\Y\\e\\a\\r Y"), "Year 2024");
        assert_eq!(format_date(&d, "Y|m"), "2024|06");
        assert_eq!(format_date(&d, ""), "");
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }
}
