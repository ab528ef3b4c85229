//! Greedy first-fit packing of work items into days

use super::calendar::{first_working_day, format_time_of_day, next_working_day};
use super::observer::ScheduleObserver;
use super::{Assignment, ScheduleDay, ScheduleResult, ScheduleSummary, SchedulerSettings, WorkItem};
use crate::types::{AppError, Result};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Slack allowed when comparing a day's running total against capacity
pub(crate) const CAPACITY_EPSILON: f64 = 1e-9;

/// Partition `items` into consecutive days without exceeding the daily capacity.
///
/// Items are consumed in the order given; ranking is the caller's job.
/// Settings and items are validated up front and days are reported to
/// `observer` only after packing succeeds, so on error nothing has been
/// reported and no partial result exists.
///
/// # Errors
///
/// * [`AppError::InvalidConfiguration`] - capacity is not a positive finite
///   number, the day start hour is not a valid hour, or the schedule would
///   run past the last representable date
/// * [`AppError::MalformedInput`] - an item has an empty or duplicate id, or
///   a duration that is not a positive finite number
pub fn schedule(
    items: &[WorkItem],
    settings: &SchedulerSettings,
    start_date: NaiveDate,
    observer: &dyn ScheduleObserver,
) -> Result<ScheduleResult> {
    validate_settings(settings)?;
    validate_items(items)?;

    let mut days = Vec::new();
    let first = first_working_day(start_date, settings.skip_weekends)
        .ok_or_else(|| calendar_exhausted(start_date))?;
    let mut current = DayBuilder::new(first);

    for item in items {
        // An empty day always takes the next item, oversized or not.
        if !current.is_empty() && !current.fits(item, settings.capacity_hours_per_day) {
            let next_date = next_working_day(current.date, settings.skip_weekends)
                .ok_or_else(|| calendar_exhausted(start_date))?;
            let full = std::mem::replace(&mut current, DayBuilder::new(next_date));
            days.push(full.finish());
        }
        current.push(item, settings.day_start_hour);
    }

    if !current.is_empty() {
        days.push(current.finish());
    }

    // Reported only once every day has a date.
    for day in &days {
        observer.on_day_scheduled(day);
    }

    let summary = ScheduleSummary::derive(items, &days);
    observer.on_schedule_complete(&summary);

    Ok(ScheduleResult { days, summary })
}

fn calendar_exhausted(start_date: NaiveDate) -> AppError {
    AppError::InvalidConfiguration(format!(
        "start date {} is too close to the end of the calendar to fit the schedule",
        start_date
    ))
}

fn validate_settings(settings: &SchedulerSettings) -> Result<()> {
    let capacity = settings.capacity_hours_per_day;
    if !capacity.is_finite() || capacity <= 0.0 {
        return Err(AppError::InvalidConfiguration(format!(
            "capacity_hours_per_day must be a positive number, got {}",
            capacity
        )));
    }

    if settings.day_start_hour >= 24 {
        return Err(AppError::InvalidConfiguration(format!(
            "day_start_hour must be between 0 and 23, got {}",
            settings.day_start_hour
        )));
    }

    Ok(())
}

fn validate_items(items: &[WorkItem]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        if item.id.trim().is_empty() {
            return Err(AppError::malformed(&item.id, "id must not be empty"));
        }
        if !item.duration_hours.is_finite() || item.duration_hours <= 0.0 {
            return Err(AppError::malformed(
                &item.id,
                format!(
                    "duration_hours must be a positive number, got {}",
                    item.duration_hours
                ),
            ));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(AppError::malformed(&item.id, "duplicate id in batch"));
        }
    }

    Ok(())
}

/// Accumulator for the day currently being filled
struct DayBuilder {
    date: NaiveDate,
    hours: f64,
    assignments: Vec<Assignment>,
}

impl DayBuilder {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            hours: 0.0,
            assignments: Vec::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    fn fits(&self, item: &WorkItem, capacity: f64) -> bool {
        self.hours + item.duration_hours <= capacity + CAPACITY_EPSILON
    }

    fn push(&mut self, item: &WorkItem, day_start_hour: u32) {
        let start = self.hours;
        let end = start + item.duration_hours;

        self.assignments.push(Assignment {
            task_id: item.id.clone(),
            start_offset_hours: start,
            end_offset_hours: end,
            start_time: format_time_of_day(day_start_hour, start),
            end_time: format_time_of_day(day_start_hour, end),
            annotation: item.annotation.clone(),
        });
        self.hours = end;
    }

    fn finish(self) -> ScheduleDay {
        ScheduleDay {
            date: self.date,
            assignments: self.assignments,
            total_hours: self.hours,
        }
    }
}
