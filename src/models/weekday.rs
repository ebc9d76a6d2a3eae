use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

const MONDAY_FIRST: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// First day of the week in the store's schedule table.
///
/// Only affects the order in which days are listed; it never changes which
/// weekday a calendar date falls on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Sunday,
    #[default]
    Monday,
}

impl WeekStart {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" => Some(WeekStart::Sunday),
            "monday" | "mon" => Some(WeekStart::Monday),
            _ => None,
        }
    }

    /// The 7 weekdays in display order.
    pub fn day_order(&self) -> [Weekday; 7] {
        match self {
            WeekStart::Sunday => SUNDAY_FIRST,
            WeekStart::Monday => MONDAY_FIRST,
        }
    }

    /// Map a Sunday=0 day index into this ordering's table.
    pub fn day_for_sunday_index(&self, sunday_index: u32) -> Weekday {
        let offset = match self {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        };
        let slot = ((sunday_index % 7) + 7 - offset) % 7;
        self.day_order()[slot as usize]
    }

    /// Weekday of a calendar date, resolved through this ordering.
    pub fn weekday_of(&self, date: NaiveDate) -> Weekday {
        self.day_for_sunday_index(date.weekday().num_days_from_sunday())
    }
}

/// Canonical lowercase English key used in the working-hours table.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

pub fn weekday_from_name(name: &str) -> AppResult<Weekday> {
    match name.trim().to_lowercase().as_str() {
        "monday" => Ok(Weekday::Mon),
        "tuesday" => Ok(Weekday::Tue),
        "wednesday" => Ok(Weekday::Wed),
        "thursday" => Ok(Weekday::Thu),
        "friday" => Ok(Weekday::Fri),
        "saturday" => Ok(Weekday::Sat),
        "sunday" => Ok(Weekday::Sun),
        other => Err(AppError::InvalidWeekday(other.to_string())),
    }
}

/// Three-letter label for summaries (`Mon`, `Tue`, ...).
pub fn short_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// schema.org day code (`Mo`, `Tu`, ...).
pub fn schema_code(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}
