//! Week arithmetic: Monday-first weeks keyed by their ending Sunday.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Day order used when rendering a week
pub const DISPLAY_WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// First day (Monday) of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date - Days::new(back)
}

/// Last day (Sunday) of the week containing `date`.
pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date) + Days::new(6)
}

/// Identifier of the week containing `date`, built from its ending Sunday,
/// e.g. `2017_October_1st`.
///
/// A week that crosses a month boundary is named after the Sunday's month,
/// so `2017_October_1st` mostly holds September transactions.
pub fn week_key(date: NaiveDate) -> String {
    let end = week_end(date);
    format!(
        "{}_{}_{}",
        end.year(),
        end.format("%B"),
        day_ordinal(end.day())
    )
}

/// `1` -> `1st`, `12` -> `12th`, `23` -> `23rd`
pub fn day_ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (1, n) if n != 11 => "st",
        (2, n) if n != 12 => "nd",
        (3, n) if n != 13 => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}

/// Natural weekday numbering, Sunday=0 .. Saturday=6
pub fn weekday_index(day: Weekday) -> usize {
    day.num_days_from_sunday() as usize
}
