//! Weekly working-hours summaries for display and structured data.

use crate::models::weekday::{WeekStart, schema_code, short_label, weekday_name};
use crate::models::working_hours::{DaySchedule, WorkingHours};
use chrono::Weekday;
use serde::Serialize;
use tracing::warn;

/// Consecutive days sharing the same hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoursGroup {
    pub days: Vec<Weekday>,
    pub hours: String,
}

impl HoursGroup {
    /// `Mon`, `Mon, Tue` or `Mon - Fri`.
    pub fn label(&self) -> String {
        match self.days.as_slice() {
            [] => String::new(),
            [only] => short_label(*only).to_string(),
            [first, second] => format!("{}, {}", short_label(*first), short_label(*second)),
            [first, .., last] => format!("{} - {}", short_label(*first), short_label(*last)),
        }
    }
}

/// Group days in the store's week order. Days without any hours text are
/// left out and end the current group; the text itself is shown as entered.
pub fn group_working_hours(hours: &WorkingHours, week_start: WeekStart) -> Vec<HoursGroup> {
    let mut groups: Vec<HoursGroup> = Vec::new();
    let mut extend_last = false;

    for day in week_start.day_order() {
        let Some(text) = hours
            .entry(day)
            .map(|e| e.display())
            .filter(|t| !t.is_empty())
        else {
            extend_last = false;
            continue;
        };

        match groups.last_mut() {
            Some(current) if extend_last && current.hours == text => current.days.push(day),
            _ => groups.push(HoursGroup {
                days: vec![day],
                hours: text,
            }),
        }
        extend_last = true;
    }

    groups
}

/// schema.org `openingHours` entries, e.g. `Mo 10:00-22:00`, one per range
/// of every open day, Monday first.
pub fn opening_hours_spec(hours: &WorkingHours, closed_markers: &[String]) -> Vec<String> {
    let mut out = Vec::new();

    for day in WeekStart::Monday.day_order() {
        match hours.schedule_for(day, closed_markers) {
            Ok(DaySchedule::Open(ranges)) => {
                out.extend(
                    ranges
                        .iter()
                        .map(|range| format!("{} {}", schema_code(day), range)),
                );
            }
            Ok(DaySchedule::Closed) => {}
            Err(e) => warn!(day = weekday_name(day), error = %e, "skipping day in openingHours"),
        }
    }

    out
}
