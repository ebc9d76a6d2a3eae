//! Time utilities: parsing HH:MM clock values, minute arithmetic, formatting.
//!
//! Clock values are kept as minutes since midnight (`0..=1440`) so that a
//! closing time of `24:00` stays representable.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse `H:MM` / `HH:MM` into minutes since midnight. `24:00` is accepted.
pub fn parse_clock(t: &str) -> AppResult<u32> {
    let trimmed = t.trim();
    let (h, m) = trimmed
        .split_once(':')
        .ok_or_else(|| AppError::InvalidTime(trimmed.to_string()))?;

    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return Err(AppError::InvalidTime(trimmed.to_string()));
    }

    let hours: u32 = h
        .parse()
        .map_err(|_| AppError::InvalidTime(trimmed.to_string()))?;
    let minutes: u32 = m
        .parse()
        .map_err(|_| AppError::InvalidTime(trimmed.to_string()))?;

    if minutes > 59 || hours > 24 || (hours == 24 && minutes != 0) {
        return Err(AppError::InvalidTime(trimmed.to_string()));
    }

    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as `HH:MM`.
pub fn format_clock(mins: u32) -> String {
    format!("{:02}:{:02}", mins / 60, mins % 60)
}

/// Minutes since midnight of a chrono time (seconds are dropped).
pub fn minute_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}
