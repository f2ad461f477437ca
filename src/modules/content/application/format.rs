// src/modules/content/application/format.rs

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Locale-independent long form: "January 5, 2024".
pub fn long_date(date: NaiveDate) -> String {
    format!("{} {}, {}", month_name(date.month()), date.day(), date.year())
}

pub fn long_datetime(ts: DateTime<Utc>) -> String {
    long_date(ts.date_naive())
}

/// "January 2024", used for experience and project date ranges.
pub fn month_year(date: NaiveDate) -> String {
    format!("{} {}", month_name(date.month()), date.year())
}

/// "January 2020 - March 2021", or "- Present" for an open range.
pub fn date_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
    match end {
        Some(end) => format!("{} - {}", month_year(start), month_year(end)),
        None => format!("{} - Present", month_year(start)),
    }
}

/// Whole-years-and-remaining-months duration between two months, an open
/// range ending at `today`. Both parts appear only when both are non-zero;
/// word forms are singular at exactly 1 ("1 mo", "0 mos", "2 yrs").
pub fn duration(start: NaiveDate, end: Option<NaiveDate>, today: NaiveDate) -> String {
    let until = end.unwrap_or(today);
    let months = ((until.year() - start.year()) * 12
        + (until.month() as i32 - start.month() as i32))
        .max(0);
    let years = months / 12;
    let remaining = months % 12;

    if years > 0 && remaining > 0 {
        format!(
            "{years} {} {remaining} {}",
            year_word(years),
            month_word(remaining)
        )
    } else if years > 0 {
        format!("{years} {}", year_word(years))
    } else {
        format!("{remaining} {}", month_word(remaining))
    }
}

fn year_word(n: i32) -> &'static str {
    if n == 1 {
        "yr"
    } else {
        "yrs"
    }
}

fn month_word(n: i32) -> &'static str {
    if n == 1 {
        "mo"
    } else {
        "mos"
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => unreachable!("chrono months are 1-12"),
    }
}
