//! Calendar and wall-clock helpers for the scheduler

use chrono::{Datelike, Days, NaiveDate, Weekday};

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Roll `date` forward to the first day that may hold work.
///
/// With `skip_weekends` off every date qualifies and `date` is returned as is.
/// `None` when the roll-forward runs past the last representable date.
pub fn first_working_day(date: NaiveDate, skip_weekends: bool) -> Option<NaiveDate> {
    let mut current = date;
    while skip_weekends && is_weekend(current) {
        current = current.checked_add_days(Days::new(1))?;
    }
    Some(current)
}

/// The working day strictly after `date`, if the calendar has one
pub fn next_working_day(date: NaiveDate, skip_weekends: bool) -> Option<NaiveDate> {
    first_working_day(date.checked_add_days(Days::new(1))?, skip_weekends)
}

/// Convert an hour offset from the day start into an `HH:MM` label.
///
/// Hours are `floor(anchor + offset)`, minutes are the rounded fractional
/// part. A rounded value of 60 minutes carries into the hour. Hours are not
/// wrapped at midnight.
pub fn format_time_of_day(anchor_hour: u32, offset_hours: f64) -> String {
    let clock = anchor_hour as f64 + offset_hours;
    let mut hours = clock.floor() as i64;
    let mut minutes = ((offset_hours - offset_hours.floor()) * 60.0).round() as i64;

    if minutes >= 60 {
        hours += 1;
        minutes -= 60;
    }

    format!("{:02}:{:02}", hours, minutes)
}
