//! Weekly working hours of a store.
//!
//! A day is stored either as a free-text schedule string
//! (`"10:00-14:00,16:00-20:00"`, `"closed"`, `""`) or as a structured entry
//! with an explicit open flag. Parsing into [`DaySchedule`] happens on
//! lookup, so one malformed day never prevents the rest of the table from
//! loading.

use crate::errors::{AppError, AppResult};
use crate::models::weekday::{weekday_from_name, weekday_name};
use crate::utils::time::{MINUTES_PER_DAY, format_clock, parse_clock};
use chrono::Weekday;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}:\d{2})\s*[-–—]\s*(\d{1,2}:\d{2})$").expect("valid range regex")
});

/// Closed markers recognised in legacy free-text schedules.
pub const DEFAULT_CLOSED_MARKERS: [&str; 4] = ["closed", "выходной", "закрыто", "סגור"];

/// One opening interval of a day, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub start: u32,
    pub end: u32,
}

impl TimeRange {
    pub fn new(start: u32, end: u32) -> AppResult<Self> {
        if end > MINUTES_PER_DAY {
            return Err(AppError::InvalidSchedule(format!(
                "range end {} is past midnight",
                format_clock(end)
            )));
        }
        if start >= end {
            return Err(AppError::InvalidSchedule(format!(
                "range {}-{} does not end after it starts",
                format_clock(start),
                format_clock(end)
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse `HH:MM-HH:MM`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        let caps = RANGE_RE.captures(trimmed).ok_or_else(|| {
            AppError::InvalidSchedule(format!("'{trimmed}' is not a HH:MM-HH:MM range"))
        })?;

        let start = parse_clock(&caps[1])
            .map_err(|_| AppError::InvalidSchedule(format!("bad start time in '{trimmed}'")))?;
        let end = parse_clock(&caps[2])
            .map_err(|_| AppError::InvalidSchedule(format!("bad end time in '{trimmed}'")))?;

        Self::new(start, end)
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end - self.start
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_clock(self.start), format_clock(self.end))
    }
}

/// Parsed schedule of a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaySchedule {
    Closed,
    Open(Vec<TimeRange>),
}

impl DaySchedule {
    /// Parse a free-text schedule string.
    ///
    /// Empty or whitespace-only text and any text containing one of
    /// `closed_markers` (case-insensitive) is a closed day.
    pub fn parse(raw: &str, closed_markers: &[String]) -> AppResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || is_closed_marker(trimmed, closed_markers) {
            return Ok(DaySchedule::Closed);
        }

        let ranges = trimmed
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(TimeRange::parse)
            .collect::<AppResult<Vec<_>>>()?;

        if ranges.is_empty() {
            return Err(AppError::InvalidSchedule(format!(
                "'{trimmed}' contains no time range"
            )));
        }

        Ok(DaySchedule::Open(ranges))
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, DaySchedule::Closed)
    }
}

fn is_closed_marker(text: &str, closed_markers: &[String]) -> bool {
    let lower = text.to_lowercase();
    closed_markers
        .iter()
        .map(|m| m.trim().to_lowercase())
        .any(|m| !m.is_empty() && lower.contains(&m))
}

/// Structured day entry: `{ "isOpen": true, "open": "10:00", "close": "22:00" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDay {
    pub is_open: bool,
    #[serde(default)]
    pub open: String,
    #[serde(default)]
    pub close: String,
}

/// Raw per-day value as stored in the settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayEntry {
    Text(String),
    Structured(StructuredDay),
}

impl DayEntry {
    pub fn schedule(&self, closed_markers: &[String]) -> AppResult<DaySchedule> {
        match self {
            DayEntry::Text(raw) => DaySchedule::parse(raw, closed_markers),
            DayEntry::Structured(day) if !day.is_open => Ok(DaySchedule::Closed),
            DayEntry::Structured(day) => {
                let start = parse_clock(&day.open).map_err(|_| {
                    AppError::InvalidSchedule(format!("bad opening time '{}'", day.open))
                })?;
                let end = parse_clock(&day.close).map_err(|_| {
                    AppError::InvalidSchedule(format!("bad closing time '{}'", day.close))
                })?;
                Ok(DaySchedule::Open(vec![TimeRange::new(start, end)?]))
            }
        }
    }

    /// Hours as shown to customers; empty for a closed structured day.
    pub fn display(&self) -> String {
        match self {
            DayEntry::Text(raw) => raw.trim().to_string(),
            DayEntry::Structured(day) if day.is_open => format!("{}-{}", day.open, day.close),
            DayEntry::Structured(_) => String::new(),
        }
    }
}

/// Weekday name → day entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkingHours {
    entries: BTreeMap<String, Option<DayEntry>>,
}

impl WorkingHours {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: BTreeMap<String, Option<DayEntry>>) -> Self {
        Self { entries }
    }

    /// Builder helper: set a day's free-text schedule.
    pub fn with_day(mut self, day: Weekday, schedule: &str) -> Self {
        self.set(day, DayEntry::Text(schedule.to_string()));
        self
    }

    pub fn set(&mut self, day: Weekday, entry: DayEntry) {
        self.entries.retain(|key, _| weekday_from_name(key).ok() != Some(day));
        self.entries.insert(weekday_name(day).to_string(), Some(entry));
    }

    /// True when no day has been configured at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for `day`; keys are matched case-insensitively.
    pub fn entry(&self, day: Weekday) -> Option<&DayEntry> {
        self.entries
            .iter()
            .find(|(key, _)| weekday_from_name(key).ok() == Some(day))
            .and_then(|(_, entry)| entry.as_ref())
    }

    /// Parsed schedule for `day`. A missing day is closed.
    pub fn schedule_for(&self, day: Weekday, closed_markers: &[String]) -> AppResult<DaySchedule> {
        match self.entry(day) {
            Some(entry) => entry.schedule(closed_markers),
            None => Ok(DaySchedule::Closed),
        }
    }

    /// Keys that are not weekday names.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.entries
            .keys()
            .filter(|key| weekday_from_name(key).is_err())
            .map(String::as_str)
            .collect()
    }
}

pub fn default_closed_markers() -> Vec<String> {
    DEFAULT_CLOSED_MARKERS.iter().map(|m| m.to_string()).collect()
}
